use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Values of the variables referenced by an expression.
pub trait Vars {
    fn get(&self, name: char) -> Option<f64>;
}

impl<T: Vars + ?Sized> Vars for &T {
    fn get(&self, name: char) -> Option<f64> {
        (**self).get(name)
    }
}

impl<S: BuildHasher> Vars for HashMap<char, f64, S> {
    fn get(&self, name: char) -> Option<f64> {
        HashMap::get(self, &name).copied()
    }
}

impl Vars for BTreeMap<char, f64> {
    fn get(&self, name: char) -> Option<f64> {
        BTreeMap::get(self, &name).copied()
    }
}

// later pairs shadow earlier ones
impl Vars for [(char, f64)] {
    fn get(&self, name: char) -> Option<f64> {
        self.iter().rev().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Vars for [(char, f64); N] {
    fn get(&self, name: char) -> Option<f64> {
        Vars::get(self.as_slice(), name)
    }
}

impl Vars for Vec<(char, f64)> {
    fn get(&self, name: char) -> Option<f64> {
        Vars::get(self.as_slice(), name)
    }
}
