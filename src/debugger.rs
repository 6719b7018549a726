//! Debugger integration surface
//!
//! The orchestrator-facing seam: a per-language debugger is selected by
//! name, asked to produce a debuggable entry point, and later disposed.
//! Everything here is thin sequencing around the extractor, emitter,
//! and lifecycle helpers.

use std::path::PathBuf;

use crate::emit;
use crate::error::{Error, Result};
use crate::lifecycle::{self, SolutionContext};
use crate::signature;

/// One debug session over a solution document.
pub trait Debugger {
    /// Produce the generated program and return its path as the
    /// debugging entry point. `None` means abstain: no debuggable
    /// entry for this solution (e.g. an unsupported problem shape).
    fn init(&mut self) -> Result<Option<PathBuf>>;

    /// Undo any mutation made to the solution document. Runs exactly
    /// once per session; safe to call after an abstained `init`.
    fn dispose(&mut self) -> Result<()>;
}

/// Select a debugger for the solution's declared language.
pub fn debugger_for(
    language: &str,
    context: SolutionContext,
    code_template: String,
) -> Option<Box<dyn Debugger>> {
    match language {
        "cpp" | "c++" => Some(Box::new(CppDebugger::new(context, code_template))),
        // unsupported yet
        _ => None,
    }
}

/// Debugger for C++ solutions
pub struct CppDebugger {
    context: SolutionContext,
    code_template: String,
    inserted_include: bool,
}

impl CppDebugger {
    pub fn new(context: SolutionContext, code_template: String) -> Self {
        Self {
            context,
            code_template,
            inserted_include: false,
        }
    }
}

impl Debugger for CppDebugger {
    fn init(&mut self) -> Result<Option<PathBuf>> {
        let signature = match signature::extract(&self.code_template) {
            Ok(signature) => signature,
            // not a single-call problem: abstain rather than fail the
            // whole debug command
            Err(Error::UnsupportedProblem(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let artifact = emit::emit(
            &signature,
            &self.code_template,
            &self.context.solution_path,
        )?;

        if lifecycle::insert_defs_include(&self.context.solution_path)? {
            self.inserted_include = true;
        }

        Ok(Some(artifact.program_path))
    }

    fn dispose(&mut self) -> Result<()> {
        if self.inserted_include {
            lifecycle::remove_defs_include(&self.context.solution_path)?;
            self.inserted_include = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_has_no_debugger() {
        let ctx = SolutionContext::new("/tmp/sol.py", "python");
        assert!(debugger_for("python", ctx, String::new()).is_none());
    }
}
