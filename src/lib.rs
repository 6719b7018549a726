// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # judgegen — structural test harness compiler
//!
//! Turns a single-method solution class written against a fixed
//! problem-solving API into a standalone, compilable test harness.
//!
//! ## Core Concept
//!
//! Three pieces do the real work:
//!
//! - **Signature extraction** recovers the entry method's name,
//!   argument types, and return type from the problem template dialect
//!   by light pattern matching — no full-language parser.
//! - The **format codec** defines a bidirectional text grammar over a
//!   closed set of shapes (scalars, strings, booleans, `null`,
//!   sequences, fixed-arity tuples, binary trees, linked lists).
//! - The **harness emitter** stitches the signature, the codec's
//!   static support code, and driver scaffolding into one generated
//!   C++ program that decodes records from stdin, invokes the method,
//!   and encodes results to stdout.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use judgegen::{extract, emit};
//! use std::path::Path;
//!
//! let template = std::fs::read_to_string("two-sum.cpp")?;
//! let signature = extract(&template)?;
//! let artifact = emit(&signature, &template, Path::new("two-sum.cpp"))?;
//! println!("debug entry: {}", artifact.program_path.display());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                                                           │
//! │  SOLUTION + CODE TEMPLATE                                 │
//! │       │                                                   │
//! │       ├──► extract(text) ──► MethodSignature              │
//! │       │                                                   │
//! │       ├──► emit(sig, template, path) ──► harness .cpp     │
//! │       │                                                   │
//! │       └──► decode_record / encode_value ──► WireValue     │
//! │                                                           │
//! │  LIFECYCLE                                                │
//! │       │                                                   │
//! │       ├──► ArtifactPaths (sibling defs + program files)   │
//! │       │                                                   │
//! │       └──► Debugger::init / dispose (include insertion)   │
//! │                                                           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire grammar and the per-record allocation discipline are
//! documented in [`codec`]; the generated program embeds an equivalent
//! C++ rendition of both.

pub mod cli;
pub mod codec;
pub mod debugger;
pub mod emit;
pub mod error;
pub mod lifecycle;
pub mod signature;
pub mod templates;

pub use codec::{
    decode_record, decode_value, encode_value, Decoder, NodeId, Shape, TreeArena, TreeNode,
    WireValue,
};
pub use debugger::{debugger_for, CppDebugger, Debugger};
pub use emit::{emit, EmitConfig, Emitter, GeneratedArtifact, HarnessContext};
pub use error::{Error, Result};
pub use lifecycle::{
    ArtifactPaths, FileTemplateProvider, SolutionContext, TemplateProvider, SHARED_DEFS_FILE,
};
pub use signature::{extract, Extractor, ExtractorConfig, MethodArgument, MethodSignature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
