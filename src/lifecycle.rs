//! Artifact lifecycle — paths, clobber guards, and source restoration
//!
//! Computes deterministic sibling paths for the shared-definitions and
//! generated-program files, and reverses the include-line insertion
//! made into the solution document when a session tears down.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the shared type-definitions header, one per directory.
pub const SHARED_DEFS_FILE: &str = "harness_defs.h";

/// Paths of the artifacts a session produces, derived from the
/// solution file's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Shared definitions header; created once, never rewritten
    pub shared_defs: PathBuf,
    /// Generated program; rewritten every session
    pub program: PathBuf,
}

impl ArtifactPaths {
    /// Compute sibling artifact paths for a solution file.
    pub fn for_solution(solution: &Path) -> Result<Self> {
        let dir = solution
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                Error::Emit(format!(
                    "solution file '{}' has no parent directory",
                    solution.display()
                ))
            })?;
        let stem = solution.file_stem().ok_or_else(|| {
            Error::Emit(format!("solution path '{}' has no file name", solution.display()))
        })?;

        Ok(Self {
            shared_defs: dir.join(SHARED_DEFS_FILE),
            program: dir.join(format!("{}_harness.cpp", stem.to_string_lossy())),
        })
    }
}

/// The include line inserted at the top of the solution document.
pub fn defs_include_line() -> String {
    format!("#include \"{}\"", SHARED_DEFS_FILE)
}

/// Insert the shared-definitions include as the first line of the
/// solution document. Returns `false` when it is already present.
pub fn insert_defs_include(solution: &Path) -> Result<bool> {
    let text = fs::read_to_string(solution)?;
    let line = defs_include_line();
    if text.lines().next().map(str::trim_end) == Some(line.as_str()) {
        return Ok(false);
    }
    fs::write(solution, format!("{}\n{}", line, text))?;
    Ok(true)
}

/// Remove the inserted include line. Strips exactly the first line, and
/// only when it is still the inserted include — anything else means the
/// document changed in a way that makes line-0 removal unsafe, so the
/// call is a no-op. Returns whether a line was removed.
pub fn remove_defs_include(solution: &Path) -> Result<bool> {
    let text = fs::read_to_string(solution)?;
    let mut parts = text.splitn(2, '\n');
    match parts.next() {
        Some(first) if first.trim_end() == defs_include_line() => {
            fs::write(solution, parts.next().unwrap_or(""))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Everything the orchestrator knows about the active solution.
#[derive(Debug, Clone)]
pub struct SolutionContext {
    /// Path of the solution document
    pub solution_path: PathBuf,
    /// Declared language of the solution (e.g. `cpp`)
    pub language: String,
}

impl SolutionContext {
    pub fn new(solution_path: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            solution_path: solution_path.into(),
            language: language.into(),
        }
    }
}

/// Lookup of a problem's canonical code template. The real provider
/// lives with the orchestrator; this seam keeps it out of the core.
pub trait TemplateProvider {
    fn code_template(&self, problem_id: u64, language: &str) -> Result<String>;
}

/// Provider backed by a directory of template files named
/// `<problem_id>.<extension>`.
#[derive(Debug, Clone)]
pub struct FileTemplateProvider {
    dir: PathBuf,
}

impl FileTemplateProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateProvider for FileTemplateProvider {
    fn code_template(&self, problem_id: u64, language: &str) -> Result<String> {
        let extension = match language {
            "cpp" | "c++" => "cpp",
            other => {
                return Err(Error::Other(format!(
                    "no template extension for language '{}'",
                    other
                )))
            }
        };
        let path = self.dir.join(format!("{}.{}", problem_id, extension));
        Ok(fs::read_to_string(path)?)
    }
}
