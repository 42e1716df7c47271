//! Parse flat arithmetic expressions like `2 * (x - 3)` into a tree and
//! evaluate it against variable bindings.
//!
//! The pipeline is [`lex`], [`build`] (which [`group`]s by parentheses and then
//! [`parse`]s) and [`Ast::eval`].

pub use error::*;
pub use eval::*;
pub use group::*;
pub use lex::*;
pub use parse::*;

mod error;
mod eval;
mod group;
mod lex;
mod parse;

/// Lex, build and evaluate `input` in one go.
///
/// ```
/// let val = connective::calc("2 * (x - 3)", &[('x', 5.0)]).unwrap();
/// assert_eq!(val, 4.0);
/// ```
pub fn calc(input: &str, vars: &(impl Vars + ?Sized)) -> crate::Result<f64> {
    let tokens = lex(input);
    match build(tokens)? {
        Some(ast) => ast.eval(vars),
        None => Err(crate::Error::Empty),
    }
}
