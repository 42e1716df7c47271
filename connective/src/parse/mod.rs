use tracing::trace;

use crate::{group, Ast, Item, OpT, Operand, Token};


/// Groups `tokens` and builds the tree of the resulting items.
///
/// Returns `Ok(None)` if no tree can be built at all, like for empty input.
/// Missing operands deeper in the tree are kept as absent children and only
/// reported by [`Ast::eval`].
pub fn build(tokens: Vec<Token>) -> crate::Result<Option<Ast>> {
    let items = group(tokens)?;
    Ok(parse(&items))
}

/// Builds the tree of a sequence of items.
///
/// The main connective, the operator that binds weakest, is the root. Among
/// operators of equal priority the rightmost one wins, which makes the binary
/// operators left associative. Groups are opaque while searching.
pub fn parse(items: &[Item]) -> Option<Ast> {
    let main = items
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.as_op().map(|o| (i, o)))
        .fold(None, |max: Option<(usize, OpT)>, (i, o)| match max {
            Some((_, m)) if m.priority() > o.priority() => max,
            _ => Some((i, o)),
        });

    let Some((i, op)) = main else {
        return match items {
            [Item::Group(g)] => parse(&g.items),
            [Item::Var(c)] => Some(Ast::Var(*c)),
            [Item::Num(n)] => Some(Ast::Num(*n)),
            [Item::Op(_)] | [] | [_, _, ..] => None,
        };
    };
    trace!(index = i, %op, len = items.len(), "main connective");

    let node = match op {
        // the prefix applies to everything after the first item, so inner
        // minuses of a chain like `--x` stay nested
        OpT::Neg => Ast::Neg(operand(&items[1..])),
        OpT::Mul => Ast::Mul(operand(&items[..i]), operand(&items[i + 1..])),
        OpT::Div => Ast::Div(operand(&items[..i]), operand(&items[i + 1..])),
        OpT::Add => Ast::Add(operand(&items[..i]), operand(&items[i + 1..])),
        OpT::Sub => Ast::Sub(operand(&items[..i]), operand(&items[i + 1..])),
    };
    Some(node)
}

fn operand(items: &[Item]) -> Operand {
    parse(items).map(Box::new)
}
