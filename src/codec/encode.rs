//! Wire text encoding
//!
//! The inverse of the decoder, over the same grammar. Scalars use
//! default `Display` formatting; for floats that is the shortest form
//! that parses back to the same value, which fixes the precision
//! policy for round-trips.

use std::collections::{HashSet, VecDeque};

use crate::codec::tree::{NodeId, TreeArena};
use crate::codec::WireValue;
use crate::error::{Error, Result};

/// Encode one value to wire text.
///
/// Tree values need the arena they were decoded into; a tree that
/// references a node twice (a cycle, or shared structure) is reported
/// as a `[tree]` format error instead of looping.
pub fn encode_value(value: &WireValue, arena: &TreeArena) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value, arena)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &WireValue, arena: &TreeArena) -> Result<()> {
    match value {
        WireValue::Int(v) => out.push_str(&v.to_string()),
        WireValue::Float(v) => out.push_str(&v.to_string()),
        WireValue::Bool(true) => out.push_str("true"),
        WireValue::Bool(false) => out.push_str("false"),
        WireValue::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        WireValue::Null => out.push_str("null"),
        WireValue::Seq(items) | WireValue::Tuple(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item, arena)?;
            }
            out.push(']');
        }
        WireValue::Tree(root) => write_tree(out, *root, arena)?,
    }
    Ok(())
}

/// Level-order tree encoding. Every slot of a non-null node is written,
/// then trailing null cells are trimmed, so interior gaps stay explicit
/// while all-null tail frontiers are omitted.
fn write_tree(out: &mut String, root: Option<NodeId>, arena: &TreeArena) -> Result<()> {
    out.push('[');
    if let Some(root) = root {
        let mut cells: Vec<Option<i64>> = Vec::new();
        let mut queue: VecDeque<Option<NodeId>> = VecDeque::new();
        let mut seen: HashSet<NodeId> = HashSet::new();
        queue.push_back(Some(root));
        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(id) => {
                    if !seen.insert(id) {
                        return Err(Error::format("[tree]", "cycle detected in tree"));
                    }
                    let node = arena.get(id);
                    cells.push(Some(node.val));
                    queue.push_back(node.left);
                    queue.push_back(node.right);
                }
                None => cells.push(None),
            }
        }
        while matches!(cells.last(), Some(None)) {
            cells.pop();
        }
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            match cell {
                Some(v) => out.push_str(&v.to_string()),
                None => out.push_str("null"),
            }
        }
    }
    out.push(']');
    Ok(())
}
