//! Wire text decoding
//!
//! A cursor-based reader over one record of encoded text. Decoding is
//! parameterized by [`Shape`]; every failure carries the shape tag of
//! the construct being read (`[bool]`, `[vector]`, ...).
//!
//! Only the outermost decode of a value validates the terminator that
//! follows it; recursive decodes leave structural boundaries to their
//! caller, which the nesting depth counter keeps track of.

use std::collections::VecDeque;

use crate::codec::shape::Shape;
use crate::codec::tree::{NodeId, TreeArena};
use crate::codec::WireValue;
use crate::error::{Error, Result};

/// Tag used for record-level framing errors.
pub const RECORD_TAG: &str = "[record]";

/// Cursor over one record of wire text
pub struct Decoder<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Decode one top-level value and validate its terminator: the value
    /// must be followed by `,`, end-of-line, or end-of-input.
    pub fn decode(&mut self, shape: &Shape, arena: &mut TreeArena) -> Result<WireValue> {
        let value = self.decode_shape(shape, arena)?;
        debug_assert_eq!(self.depth, 0);
        self.skip_ws();
        match self.peek() {
            None | Some(',') | Some('\n') | Some('\r') => Ok(value),
            Some(c) => Err(self.err(
                shape.tag(),
                format!("expected separator or end of input after value, found '{}'", c),
            )),
        }
    }

    fn decode_shape(&mut self, shape: &Shape, arena: &mut TreeArena) -> Result<WireValue> {
        match shape {
            Shape::Int => Ok(WireValue::Int(self.read_int(shape.tag())?)),
            Shape::Float => Ok(WireValue::Float(self.read_float(shape.tag())?)),
            Shape::Bool => self.decode_bool(),
            Shape::Str => self.decode_str(),
            Shape::Seq(elem) => self.decode_seq(elem, arena),
            Shape::Tuple(elems) => self.decode_tuple(elems, arena),
            Shape::Tree => self.decode_tree(arena),
            Shape::List => self.decode_list(),
        }
    }

    fn decode_bool(&mut self) -> Result<WireValue> {
        self.skip_ws();
        let tag = Shape::Bool.tag();
        let (literal, value) = match self.peek() {
            Some('t') => ("true", true),
            Some('f') => ("false", false),
            _ => return Err(self.err(tag, "expected 'true' or 'false'")),
        };
        self.expect_literal(literal, tag)?;
        Ok(WireValue::Bool(value))
    }

    fn decode_str(&mut self) -> Result<WireValue> {
        self.skip_ws();
        let tag = Shape::Str.tag();
        if !self.eat('"') {
            return Err(self.err(tag, "expected '\"'"));
        }
        let rest = &self.input[self.pos..];
        match rest.find('"') {
            Some(end) => {
                let content = rest[..end].to_string();
                self.pos += end + 1;
                Ok(WireValue::Str(content))
            }
            None => Err(self.err(tag, "unterminated string")),
        }
    }

    fn decode_seq(&mut self, elem: &Shape, arena: &mut TreeArena) -> Result<WireValue> {
        let tag = "[vector]";
        self.skip_ws();
        if !self.eat('[') {
            return Err(self.err(tag, "expected '['"));
        }
        self.skip_ws();
        let mut items = Vec::new();
        if self.eat(']') {
            return Ok(WireValue::Seq(items));
        }
        self.depth += 1;
        loop {
            items.push(self.decode_shape(elem, arena)?);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                break;
            }
            return Err(self.err(tag, "expected ',' or ']'"));
        }
        self.depth -= 1;
        Ok(WireValue::Seq(items))
    }

    fn decode_tuple(&mut self, elems: &[Shape], arena: &mut TreeArena) -> Result<WireValue> {
        let tag = "[tuple]";
        self.skip_ws();
        if !self.eat('[') {
            return Err(self.err(tag, "expected '['"));
        }
        self.depth += 1;
        let mut items = Vec::with_capacity(elems.len());
        for (i, shape) in elems.iter().enumerate() {
            if i > 0 {
                self.skip_ws();
                if !self.eat(',') {
                    return Err(self.err(tag, "expected ','"));
                }
            }
            items.push(self.decode_shape(shape, arena)?);
        }
        self.skip_ws();
        if !self.eat(']') {
            return Err(self.err(tag, "expected ']'"));
        }
        self.depth -= 1;
        Ok(WireValue::Tuple(items))
    }

    fn decode_list(&mut self) -> Result<WireValue> {
        let tag = "[list]";
        self.skip_ws();
        if !self.eat('[') {
            return Err(self.err(tag, "expected '['"));
        }
        self.skip_ws();
        let mut items = Vec::new();
        if self.eat(']') {
            return Ok(WireValue::Seq(items));
        }
        loop {
            items.push(WireValue::Int(self.read_int(tag)?));
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                break;
            }
            return Err(self.err(tag, "expected ',' or ']'"));
        }
        Ok(WireValue::Seq(items))
    }

    /// Level-order tree decode. Reads the root, then expands the
    /// frontier breadth-first, consuming two child cells per dequeued
    /// non-null node; `]` is accepted at any cell boundary so truncated
    /// encodings (trailing all-null frontiers omitted) round-trip.
    fn decode_tree(&mut self, arena: &mut TreeArena) -> Result<WireValue> {
        let tag = "[tree]";
        self.skip_ws();
        if !self.eat('[') {
            return Err(self.err(tag, "expected '['"));
        }
        self.depth += 1;
        self.skip_ws();
        if self.eat(']') {
            self.depth -= 1;
            return Ok(WireValue::Tree(None));
        }

        let root = self.decode_tree_cell(arena)?;
        let Some(root_id) = root else {
            self.skip_ws();
            if !self.eat(']') {
                return Err(self.err(tag, "expected ']' after null root"));
            }
            self.depth -= 1;
            return Ok(WireValue::Tree(None));
        };

        let mut frontier: VecDeque<NodeId> = VecDeque::new();
        frontier.push_back(root_id);
        'expand: while let Some(parent) = frontier.pop_front() {
            for side in 0..2 {
                self.skip_ws();
                if self.peek() == Some(']') {
                    break 'expand;
                }
                if !self.eat(',') {
                    return Err(self.err(tag, "expected ',' or ']'"));
                }
                let child = self.decode_tree_cell(arena)?;
                if side == 0 {
                    arena.set_left(parent, child);
                } else {
                    arena.set_right(parent, child);
                }
                if let Some(id) = child {
                    frontier.push_back(id);
                }
            }
        }
        self.skip_ws();
        if !self.eat(']') {
            // also reached when cells remain after the frontier is spent
            return Err(self.err(tag, "expected ']'"));
        }
        self.depth -= 1;
        Ok(WireValue::Tree(Some(root_id)))
    }

    fn decode_tree_cell(&mut self, arena: &mut TreeArena) -> Result<Option<NodeId>> {
        self.skip_ws();
        if self.rest().starts_with("null") {
            self.pos += 4;
            return Ok(None);
        }
        let val = self.read_int("[tree]")?;
        Ok(Some(arena.alloc(val)))
    }

    fn read_int(&mut self, tag: &'static str) -> Result<i64> {
        self.skip_ws();
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.bump();
        }
        while matches!(self.peek(), Some('0'..='9')) {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        if text.is_empty() || text == "-" || text == "+" {
            return Err(self.err(tag, "expected integer"));
        }
        text.parse()
            .map_err(|_| self.err(tag, format!("integer '{}' out of range", text)))
    }

    fn read_float(&mut self, tag: &'static str) -> Result<f64> {
        self.skip_ws();
        let start = self.pos;
        while matches!(
            self.peek(),
            Some('0'..='9') | Some('-') | Some('+') | Some('.') | Some('e') | Some('E')
        ) {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        if text.is_empty() {
            return Err(self.err(tag, "expected number"));
        }
        text.parse()
            .map_err(|_| self.err(tag, format!("malformed number '{}'", text)))
    }

    fn expect_literal(&mut self, literal: &str, tag: &'static str) -> Result<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            let found: String = self
                .rest()
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            Err(self.err(tag, format!("malformed literal '{}', expected '{}'", found, literal)))
        }
    }

    pub(crate) fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.bump();
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.input.as_bytes().get(self.pos).map(|&b| b as char)
    }

    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn err(&self, tag: &'static str, message: impl Into<String>) -> Error {
        Error::format(tag, format!("{} at byte {}", message.into(), self.pos))
    }
}

/// Decode one complete value from `text`; trailing content beyond the
/// record boundary is an error.
pub fn decode_value(shape: &Shape, text: &str, arena: &mut TreeArena) -> Result<WireValue> {
    let mut dec = Decoder::new(text);
    let value = dec.decode(shape, arena)?;
    dec.finish(shape.tag())?;
    Ok(value)
}

/// Decode one record: one value per shape in order, separated by `,`.
pub fn decode_record(
    shapes: &[Shape],
    text: &str,
    arena: &mut TreeArena,
) -> Result<Vec<WireValue>> {
    let mut dec = Decoder::new(text);
    let mut values = Vec::with_capacity(shapes.len());
    for (i, shape) in shapes.iter().enumerate() {
        if i > 0 {
            dec.skip_ws();
            if !dec.eat(',') {
                return Err(Error::format(
                    RECORD_TAG,
                    format!("expected ',' before argument {}", i + 1),
                ));
            }
        }
        values.push(dec.decode(shape, arena)?);
    }
    dec.finish(RECORD_TAG)?;
    Ok(values)
}

impl Decoder<'_> {
    /// Require that nothing but whitespace and line ends remain.
    fn finish(&mut self, tag: &'static str) -> Result<()> {
        self.skip_ws();
        while matches!(self.peek(), Some('\n') | Some('\r')) {
            self.bump();
        }
        if self.peek().is_some() {
            return Err(self.err(tag, "trailing input after record"));
        }
        Ok(())
    }
}
