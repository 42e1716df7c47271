use std::collections::{BTreeMap, HashMap};

use crate::{build, lex, OpT};

use super::*;

const NO_VARS: [(char, f64); 0] = [];

fn ast(input: &str) -> Ast {
    build(lex(input)).unwrap().unwrap()
}

fn eval(input: &str) -> crate::Result<f64> {
    ast(input).eval(&NO_VARS)
}

#[test]
fn literal() {
    assert_eq!(eval("7"), Ok(7.0));
}

#[test]
fn bound_var() {
    assert_eq!(ast("x").eval(&[('x', 2.5)]), Ok(2.5));
}

#[test]
fn unbound_var() {
    assert_eq!(eval("x"), Err(crate::Error::UnboundVar('x')));
    assert_eq!(
        ast("x+y").eval(&[('x', 1.0)]),
        Err(crate::Error::UnboundVar('y'))
    );
}

#[test]
fn arithmetic() {
    assert_eq!(eval("2-3-4"), Ok(-5.0));
    assert_eq!(eval("2/4/2"), Ok(0.25));
    assert_eq!(eval("2+3*4"), Ok(14.0));
    assert_eq!(eval("(2+3)*4"), Ok(20.0));
    assert_eq!(eval("--3"), Ok(3.0));
    assert_eq!(eval("-2*3"), Ok(-6.0));
    assert_eq!(eval("2⋅3"), Ok(6.0));
}

#[test]
fn div_by_zero_is_not_an_error() {
    assert_eq!(eval("1/0"), Ok(f64::INFINITY));
    assert_eq!(eval("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(eval("0/0").unwrap().is_nan());
}

#[test]
fn missing_operand() {
    assert_eq!(eval("2+"), Err(crate::Error::InvalidExpression(OpT::Add)));
    assert_eq!(eval("/2"), Err(crate::Error::InvalidExpression(OpT::Div)));
    assert_eq!(eval("-"), Err(crate::Error::InvalidExpression(OpT::Neg)));
    assert_eq!(
        eval("1+(2*)"),
        Err(crate::Error::InvalidExpression(OpT::Mul))
    );
}

#[test]
fn missing_operand_is_reported_before_unbound_var() {
    assert_eq!(eval("x-"), Err(crate::Error::InvalidExpression(OpT::Sub)));
}

#[test]
fn reuse() {
    let ast = ast("a*b-c");
    let vars = HashMap::from([('a', 2.0), ('b', 3.0), ('c', 1.0)]);
    assert_eq!(ast.eval(&vars), Ok(5.0));
    assert_eq!(ast.eval(&vars), Ok(5.0));

    let vars = BTreeMap::from([('a', 1.0), ('b', 1.0), ('c', 1.0)]);
    assert_eq!(ast.eval(&vars), Ok(0.0));
}

#[test]
fn tree_survives_failed_eval() {
    let ast = ast("x/2");
    assert_eq!(ast.eval(&NO_VARS), Err(crate::Error::UnboundVar('x')));
    assert_eq!(ast.eval(&[('x', 3.0)]), Ok(1.5));
}

#[test]
fn later_binding_shadows() {
    let vars = vec![('x', 1.0), ('x', 4.0)];
    assert_eq!(ast("x").eval(&vars), Ok(4.0));
}

#[test]
fn labels() {
    assert_eq!(ast("x").label(), "x");
    assert_eq!(ast("120").label(), "120");
    assert_eq!(ast("-x").label(), "−");
    assert_eq!(ast("a*b").label(), "⋅");
    assert_eq!(ast("a⋅b").label(), "⋅");
    assert_eq!(ast("a/b").label(), "/");
    assert_eq!(ast("a+b").label(), "+");
    assert_eq!(ast("a-b").label(), "-");
}

#[test]
fn children() {
    let ast = ast("1+");
    assert_eq!(ast.op(), Some(OpT::Add));
    assert_eq!(ast.children(), vec![Some(&Ast::Num(1.0)), None]);
    assert!(Ast::Var('x').children().is_empty());
    assert_eq!(Ast::Num(3.0).op(), None);
}

#[test]
fn arity_matches_operator() {
    for input in ["-x", "a*b", "a/b", "a+b", "a-b", "-", "+", "1*"] {
        let ast = ast(input);
        let op = ast.op().unwrap();
        let arity = if op.is_unary() { 1 } else { 2 };
        assert_eq!(ast.children().len(), arity, "{input}");
    }
}
