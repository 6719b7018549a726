//! Template-based program generation
//!
//! Uses MiniJinja for the generated C++ program. Templates are embedded
//! by default, with optional override via the `--template-dir` CLI flag.

pub mod filters;

use minijinja::Environment;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;

/// Template name of the generated program skeleton.
pub const MAIN_TEMPLATE: &str = "main.cpp.jinja";

// Embedded templates (compiled into binary)
mod embedded {
    /// Shared type-definitions header, written once per directory
    pub const SHARED_DEFS: &str = include_str!("../../templates/defs.h");
    /// Static codec support code spliced into every generated program
    pub const SUPPORT: &str = include_str!("../../templates/support.cpp");
    /// Generated program skeleton
    pub const MAIN: &str = include_str!("../../templates/main.cpp.jinja");
}

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

/// Initialize the template engine with embedded templates
fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();

    filters::register_filters(&mut env);

    env.add_template(MAIN_TEMPLATE, embedded::MAIN)
        .expect("Failed to load main harness template");

    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Create a new template engine with a custom template directory.
/// Templates found in `custom_dir` override embedded ones.
pub fn engine_with_override(custom_dir: &Path) -> Result<Environment<'static>> {
    let mut env = init_engine();

    let candidate = custom_dir.join(MAIN_TEMPLATE);
    if candidate.exists() {
        let source = std::fs::read_to_string(&candidate)?;
        env.add_template_owned(MAIN_TEMPLATE.to_string(), source)?;
    }

    Ok(env)
}

/// The shared type-definitions header text
pub fn shared_defs() -> &'static str {
    embedded::SHARED_DEFS
}

/// The static codec support code text
pub fn support_code() -> &'static str {
    embedded::SUPPORT
}
