use thiserror::Error;

use crate::OpT;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid expression, missing an operand of `{0}`")]
    InvalidExpression(OpT),
    #[error("Unbound variable `{0}`")]
    UnboundVar(char),
    #[error("Found an unexpected parenthesis")]
    UnexpectedPar,
    #[error("Nothing to evaluate")]
    Empty,
    #[error("Expression nests deeper than {} levels", crate::MAX_DEPTH)]
    TooDeep,
}

impl Error {
    /// Errors that depend on the structure of the input, not on the variables
    /// passed to evaluation.
    pub const fn is_structural(&self) -> bool {
        match self {
            Self::InvalidExpression(_) | Self::UnexpectedPar | Self::Empty | Self::TooDeep => {
                true
            }
            Self::UnboundVar(_) => false,
        }
    }
}
