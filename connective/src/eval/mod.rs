use std::fmt::{self, Display};

use crate::OpT;

pub use var::*;

#[cfg(test)]
mod test;
mod var;

/// A child slot. `None` means the operand was missing from the input.
pub type Operand = Option<Box<Ast>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    Var(char),
    Num(f64),
    Neg(Operand),
    Mul(Operand, Operand),
    Div(Operand, Operand),
    Add(Operand, Operand),
    Sub(Operand, Operand),
}

impl Ast {
    /// The operator of an inner node.
    pub const fn op(&self) -> Option<OpT> {
        match self {
            Self::Var(_) | Self::Num(_) => None,
            Self::Neg(_) => Some(OpT::Neg),
            Self::Mul(..) => Some(OpT::Mul),
            Self::Div(..) => Some(OpT::Div),
            Self::Add(..) => Some(OpT::Add),
            Self::Sub(..) => Some(OpT::Sub),
        }
    }

    /// The child slots in order, empty for leaves.
    pub fn children(&self) -> Vec<Option<&Ast>> {
        match self {
            Self::Var(_) | Self::Num(_) => Vec::new(),
            Self::Neg(a) => vec![a.as_deref()],
            Self::Mul(a, b) | Self::Div(a, b) | Self::Add(a, b) | Self::Sub(a, b) => {
                vec![a.as_deref(), b.as_deref()]
            }
        }
    }

    /// Symbol of this node alone, children are not included.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn eval(&self, vars: &(impl Vars + ?Sized)) -> crate::Result<f64> {
        match self {
            Self::Var(c) => vars.get(*c).ok_or(crate::Error::UnboundVar(*c)),
            Self::Num(n) => Ok(*n),
            Self::Neg(a) => Ok(-operand(OpT::Neg, a)?.eval(vars)?),
            Self::Mul(a, b) => {
                let (a, b) = operands(OpT::Mul, a, b)?;
                Ok(a.eval(vars)? * b.eval(vars)?)
            }
            Self::Div(a, b) => {
                let (a, b) = operands(OpT::Div, a, b)?;
                Ok(a.eval(vars)? / b.eval(vars)?)
            }
            Self::Add(a, b) => {
                let (a, b) = operands(OpT::Add, a, b)?;
                Ok(a.eval(vars)? + b.eval(vars)?)
            }
            Self::Sub(a, b) => {
                let (a, b) = operands(OpT::Sub, a, b)?;
                Ok(a.eval(vars)? - b.eval(vars)?)
            }
        }
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(c) => write!(f, "{c}"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Neg(_) => write!(f, "{}", OpT::Neg),
            Self::Mul(..) => write!(f, "{}", OpT::Mul),
            Self::Div(..) => write!(f, "{}", OpT::Div),
            Self::Add(..) => write!(f, "{}", OpT::Add),
            Self::Sub(..) => write!(f, "{}", OpT::Sub),
        }
    }
}

fn operand(op: OpT, a: &Operand) -> crate::Result<&Ast> {
    a.as_deref().ok_or(crate::Error::InvalidExpression(op))
}

fn operands<'a>(
    op: OpT,
    a: &'a Operand,
    b: &'a Operand,
) -> crate::Result<(&'a Ast, &'a Ast)> {
    Ok((operand(op, a)?, operand(op, b)?))
}
