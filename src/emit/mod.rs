//! Harness emission — combine signature, codec support, and driver
//! scaffolding into one generated program
//!
//! The emitter writes two sibling artifacts next to the solution file:
//! the shared type-definitions header (created once per directory and
//! left untouched after) and the generated program (rewritten every
//! session).

mod context;
mod driver;

pub use context::HarnessContext;
pub use driver::driver_body;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lifecycle::ArtifactPaths;
use crate::signature::MethodSignature;
use crate::templates;

/// Artifacts produced by one emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Shared definitions header path
    pub shared_defs_path: PathBuf,
    /// Generated program path — the debugging entry point
    pub program_path: PathBuf,
}

/// Emit the harness for a signature next to the solution file
pub fn emit(
    signature: &MethodSignature,
    code_template: &str,
    solution_path: &Path,
) -> Result<GeneratedArtifact> {
    Emitter::new().emit(signature, code_template, solution_path)
}

/// Harness emitter
pub struct Emitter {
    config: EmitConfig,
}

/// Emitter configuration
#[derive(Debug, Clone, Default)]
pub struct EmitConfig {
    /// Directory whose templates override the embedded ones
    pub template_dir: Option<PathBuf>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            config: EmitConfig::default(),
        }
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self { config }
    }

    /// Emit the shared definitions header (once) and the generated
    /// program (always rewritten).
    pub fn emit(
        &self,
        signature: &MethodSignature,
        code_template: &str,
        solution_path: &Path,
    ) -> Result<GeneratedArtifact> {
        if signature.is_design_problem || signature.is_interactive_problem {
            return Err(Error::Emit(format!(
                "signature of '{}' is not a single-call problem",
                signature.class_name
            )));
        }
        if code_template.trim().is_empty() {
            return Err(Error::Emit("code template is empty".into()));
        }

        let paths = ArtifactPaths::for_solution(solution_path)?;
        let dir = paths.program.parent().unwrap_or(Path::new("."));
        if !dir.is_dir() {
            return Err(Error::Emit(format!(
                "target directory '{}' does not exist",
                dir.display()
            )));
        }

        // idempotent: created once, reused by every later session
        if !paths.shared_defs.exists() {
            fs::write(&paths.shared_defs, templates::shared_defs())?;
        }

        let solution_file = solution_path
            .file_name()
            .ok_or_else(|| Error::Emit("solution path has no file name".into()))?
            .to_string_lossy()
            .into_owned();
        let ctx = HarnessContext::build(signature, code_template, &solution_file)?;

        let program = self.render(&ctx)?;
        fs::write(&paths.program, program)?;

        Ok(GeneratedArtifact {
            shared_defs_path: paths.shared_defs,
            program_path: paths.program,
        })
    }

    fn render(&self, ctx: &HarnessContext) -> Result<String> {
        let rendered = match &self.config.template_dir {
            Some(dir) => {
                let env = templates::engine_with_override(dir)?;
                env.get_template(templates::MAIN_TEMPLATE)?.render(ctx)?
            }
            None => templates::engine()
                .get_template(templates::MAIN_TEMPLATE)?
                .render(ctx)?,
        };
        Ok(rendered)
    }
}
