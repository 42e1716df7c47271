use connective::Ast;
use serde::{Serialize, Serializer};


#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Value(#[serde(serialize_with = "number")] f64),
    Tree(Option<Node>),
    Error(String),
}

#[derive(Serialize)]
pub struct Node {
    label: String,
    children: Vec<Option<Node>>,
}

impl Node {
    pub fn new(ast: &Ast) -> Self {
        Self {
            label: ast.label(),
            children: ast
                .children()
                .into_iter()
                .map(|c| c.map(Node::new))
                .collect(),
        }
    }
}

/// Json has no infinities or NaN, those are written as the strings `inf`,
/// `-inf` and `NaN`.
fn number<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        s.serialize_f64(*v)
    } else {
        s.collect_str(v)
    }
}
