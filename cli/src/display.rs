use std::fmt::{self, Display};

use connective::Ast;

/// Marks a missing operand.
pub const ABSENT: &str = "∅";

/// Draws a tree of node labels, one node per line.
pub struct DisplayTree<'a>(pub &'a Ast);

impl Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.label())?;
        write_children(f, self.0, "")
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, ast: &Ast, prefix: &str) -> fmt::Result {
    let children = ast.children();
    let last = children.len().saturating_sub(1);

    for (i, c) in children.into_iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└─ ", "   ")
        } else {
            ("├─ ", "│  ")
        };

        match c {
            Some(c) => {
                writeln!(f, "{prefix}{branch}{}", c.label())?;
                write_children(f, c, &format!("{prefix}{indent}"))?;
            }
            None => writeln!(f, "{prefix}{branch}{ABSENT}")?,
        }
    }

    Ok(())
}
