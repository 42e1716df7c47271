use crate::OpT;

#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Group(Group),
    Var(char),
    Num(f64),
    Op(OpT),
}

impl Item {
    pub fn group(items: Vec<Item>) -> Self {
        Self::Group(Group::new(items))
    }

    pub const fn as_op(&self) -> Option<OpT> {
        match self {
            Self::Op(o) => Some(*o),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub items: Vec<Item>,
}

impl Group {
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}
