//! Wire shapes — the closed set of value forms the grammar supports
//!
//! A `Shape` parameterizes both decoding and encoding. Shapes are
//! derived from declared C++ type tokens; anything outside the closed
//! set is an error, never a guess.

use crate::error::{Error, Result};

/// Shape of a wire value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Integer scalar (`int`, `long`, `long long`, `short`)
    Int,
    /// Floating scalar (`double`, `float`)
    Float,
    /// `bool`
    Bool,
    /// `string`, double-quoted on the wire, no escapes
    Str,
    /// Homogeneous sequence (`vector<T>`)
    Seq(Box<Shape>),
    /// Fixed-arity heterogeneous tuple (`pair<A, B>`, `tuple<...>`)
    Tuple(Vec<Shape>),
    /// Binary tree pointer (`TreeNode*`), level-order on the wire
    Tree,
    /// Singly-linked list pointer (`ListNode*`), integer sequence on the wire
    List,
}

impl Shape {
    /// Derive the wire shape for a declared C++ type token.
    ///
    /// Reference qualifiers do not change the shape; pointer qualifiers
    /// are only meaningful for the node types.
    pub fn from_cpp_type(token: &str) -> Result<Shape> {
        let token = token.trim().trim_end_matches('&').trim();

        match token {
            "int" | "long" | "long long" | "short" => return Ok(Shape::Int),
            "double" | "float" => return Ok(Shape::Float),
            "bool" => return Ok(Shape::Bool),
            "string" => return Ok(Shape::Str),
            "TreeNode*" => return Ok(Shape::Tree),
            "ListNode*" => return Ok(Shape::List),
            _ => {}
        }

        if let Some(inner) = template_args(token, "vector") {
            if inner.len() != 1 {
                return Err(Error::UnsupportedType(token.to_string()));
            }
            return Ok(Shape::Seq(Box::new(Shape::from_cpp_type(&inner[0])?)));
        }
        if let Some(inner) = template_args(token, "pair") {
            if inner.len() != 2 {
                return Err(Error::UnsupportedType(token.to_string()));
            }
            let shapes = inner
                .iter()
                .map(|t| Shape::from_cpp_type(t))
                .collect::<Result<Vec<_>>>()?;
            return Ok(Shape::Tuple(shapes));
        }
        if let Some(inner) = template_args(token, "tuple") {
            if inner.is_empty() {
                return Err(Error::UnsupportedType(token.to_string()));
            }
            let shapes = inner
                .iter()
                .map(|t| Shape::from_cpp_type(t))
                .collect::<Result<Vec<_>>>()?;
            return Ok(Shape::Tuple(shapes));
        }

        Err(Error::UnsupportedType(token.to_string()))
    }

    /// Diagnostic tag used in format errors, e.g. `[bool]`, `[vector]`.
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Int => "[int]",
            Shape::Float => "[float]",
            Shape::Bool => "[bool]",
            Shape::Str => "[string]",
            Shape::Seq(_) => "[vector]",
            Shape::Tuple(_) => "[tuple]",
            Shape::Tree => "[tree]",
            Shape::List => "[list]",
        }
    }
}

/// If `token` is `name<...>`, split the template arguments at the top
/// bracket level. Returns `None` when the token is not that template.
fn template_args(token: &str, name: &str) -> Option<Vec<String>> {
    let rest = token.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('<')?.strip_suffix('>')?;

    let mut args = Vec::new();
    let mut current = String::new();
    let mut angle = 0usize;
    for c in inner.chars() {
        match c {
            '<' => {
                angle += 1;
                current.push(c);
            }
            '>' => {
                angle = angle.saturating_sub(1);
                current.push(c);
            }
            ',' if angle == 0 => args.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        args.push(current);
    }
    Some(args.into_iter().map(|a| a.trim().to_string()).collect())
}
