use std::mem;

use tracing::debug;

use crate::Token;

pub use item::*;

mod item;
#[cfg(test)]
mod test;

/// Deepest tree [`group`] lets through. Every parenthesis and every operator
/// can add a level, so their sum is what is limited.
pub const MAX_DEPTH: usize = 1024;

#[derive(Default)]
struct Grouper {
    items: Vec<Item>,
    /// Enclosing sequences of the open groups, innermost last.
    stack: Vec<Vec<Item>>,
    max_nesting: usize,
    ops: usize,
}

impl Grouper {
    fn open(&mut self) -> crate::Result<()> {
        self.stack.push(mem::take(&mut self.items));
        self.max_nesting = self.max_nesting.max(self.stack.len());
        self.check_depth()
    }

    fn close(&mut self) -> crate::Result<()> {
        let Some(outer) = self.stack.pop() else {
            return Err(crate::Error::UnexpectedPar);
        };
        let inner = mem::replace(&mut self.items, outer);
        self.items.push(Item::group(inner));
        Ok(())
    }

    fn push(&mut self, item: Item) -> crate::Result<()> {
        if let Item::Op(_) = item {
            self.ops += 1;
            self.check_depth()?;
        }
        self.items.push(item);
        Ok(())
    }

    fn check_depth(&self) -> crate::Result<()> {
        if self.max_nesting + self.ops > MAX_DEPTH {
            return Err(crate::Error::TooDeep);
        }
        Ok(())
    }

    /// Groups that were never closed end with the input.
    fn finish(mut self) -> Vec<Item> {
        while let Some(mut outer) = self.stack.pop() {
            outer.push(Item::group(self.items));
            self.items = outer;
        }
        self.items
    }
}

/// Nests the tokens between matching parentheses into groups.
///
/// A group that is never closed ends with the input and stays the last item
/// of its enclosing sequence. A closing parenthesis without an opening one is
/// an error, as is input nesting deeper than [`MAX_DEPTH`].
pub fn group(tokens: Vec<Token>) -> crate::Result<Vec<Item>> {
    let mut grouper = Grouper::default();

    for t in tokens {
        match t {
            Token::Par(p) if p.is_opening() => grouper.open()?,
            Token::Par(_) => grouper.close()?,
            Token::Var(c) => grouper.push(Item::Var(c))?,
            Token::Num(n) => grouper.push(Item::Num(n))?,
            Token::Op(o) => grouper.push(Item::Op(o))?,
        }
    }

    let items = grouper.finish();
    debug!(?items, "grouped tokens");
    Ok(items)
}
