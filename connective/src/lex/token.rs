use strum_macros::Display;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Var(char),
    Num(f64),
    Op(OpT),
    Par(ParT),
}

impl Token {
    pub const fn var(name: char) -> Self {
        Self::Var(name)
    }

    pub const fn num(val: f64) -> Self {
        Self::Num(val)
    }

    pub const fn op(typ: OpT) -> Self {
        Self::Op(typ)
    }

    pub const fn par(typ: ParT) -> Self {
        Self::Par(typ)
    }
}

/// Operator kinds. The display string is the symbol used as a node label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum OpT {
    /// Unary minus
    #[strum(serialize = "−")]
    Neg,
    #[strum(serialize = "⋅")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
}

impl OpT {
    /// Lower binds tighter. The weakest operator of a range, the one with the
    /// highest priority, becomes the root of that range.
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Neg => 1,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 3,
        }
    }

    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Neg)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParT {
    Open,
    Close,
}

impl ParT {
    pub const fn is_opening(&self) -> bool {
        matches!(self, Self::Open)
    }
}
