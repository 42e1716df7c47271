use crate::{lex, OpT};

use super::*;

fn group_str(input: &str) -> crate::Result<Vec<Item>> {
    group(lex(input))
}

#[test]
fn no_parenthesis() {
    let items = group_str("423 * 64").unwrap();

    assert_eq!(
        items,
        vec![Item::Num(423.0), Item::Op(OpT::Mul), Item::Num(64.0)]
    );
}

#[test]
fn add_parenthesis() {
    let items = group_str("(23 + x) * 34").unwrap();

    assert_eq!(
        items,
        vec![
            Item::group(vec![Item::Num(23.0), Item::Op(OpT::Add), Item::Var('x')]),
            Item::Op(OpT::Mul),
            Item::Num(34.0),
        ]
    );
}

#[test]
fn nested_parenthesis() {
    let items = group_str("((a))-b").unwrap();

    assert_eq!(
        items,
        vec![
            Item::group(vec![Item::group(vec![Item::Var('a')])]),
            Item::Op(OpT::Sub),
            Item::Var('b'),
        ]
    );
}

#[test]
fn empty_group() {
    let items = group_str("()").unwrap();
    assert_eq!(items, vec![Item::group(vec![])]);
}

#[test]
fn missing_closing_par() {
    let items = group_str("2 * (3 + (4").unwrap();

    assert_eq!(
        items,
        vec![
            Item::Num(2.0),
            Item::Op(OpT::Mul),
            Item::group(vec![
                Item::Num(3.0),
                Item::Op(OpT::Add),
                Item::group(vec![Item::Num(4.0)]),
            ]),
        ]
    );
}

#[test]
fn unclosed_empty_group_is_kept() {
    let items = group_str("x(").unwrap();
    assert_eq!(items, vec![Item::Var('x'), Item::group(vec![])]);
}

#[test]
fn unexpected_closing_par() {
    assert_eq!(group_str("2)"), Err(crate::Error::UnexpectedPar));
    assert_eq!(group_str("(1))+(2"), Err(crate::Error::UnexpectedPar));
}

#[test]
fn closed_after_unclosed_depth() {
    // the inner group closes, the outer one runs to the end
    let items = group_str("((1)2").unwrap();
    assert_eq!(
        items,
        vec![Item::group(vec![Item::group(vec![Item::Num(1.0)]), Item::Num(2.0)])]
    );
}

#[test]
fn deep_nesting_is_rejected() {
    let opened = "(".repeat(100_000);
    assert_eq!(group_str(&opened), Err(crate::Error::TooDeep));

    let closed = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(group_str(&closed), Err(crate::Error::TooDeep));
}

#[test]
fn long_operator_chain_is_rejected() {
    let chain = format!("{}1", "1+".repeat(MAX_DEPTH));
    assert_eq!(group_str(&chain), Err(crate::Error::TooDeep));
}

#[test]
fn nesting_up_to_the_limit() {
    let input = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    let mut items = group_str(&input).unwrap();

    for _ in 0..MAX_DEPTH {
        items = match items.as_mut_slice() {
            [Item::Group(g)] => std::mem::take(&mut g.items),
            other => panic!("expected a single group, found {other:?}"),
        };
    }
    assert_eq!(items, vec![Item::Var('x')]);
}
