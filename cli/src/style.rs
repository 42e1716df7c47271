use std::fmt::{self, Display};

pub const ANSI_ESC: &str = "\x1B[0m";

#[macro_export]
macro_rules! bprintln {
    ($col:ty, $pat:expr $(,$args:expr),*) => {{
        print!("{}", <$col>::BOLD);
        print!($pat, $($args,)*);
        println!("{}", $crate::ANSI_ESC);
    }}
}

#[macro_export]
macro_rules! bprint {
    ($col:ty, $pat:expr $(,$args:expr),*) => {{
        print!("{}", <$col>::BOLD);
        print!($pat, $($args,)*);
        print!("{}", $crate::ANSI_ESC);
    }}
}

pub trait Color: Sized {
    const COLOR_CODE: u8;

    const BOLD: WriteAnsi = WriteAnsi {
        color: Self::COLOR_CODE,
    };
}

pub struct WriteAnsi {
    color: u8,
}

impl Display for WriteAnsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[1;{}m", self.color)
    }
}

pub struct LRed;
impl Color for LRed {
    const COLOR_CODE: u8 = 91;
}

pub struct LBlue;
impl Color for LBlue {
    const COLOR_CODE: u8 = 94;
}
