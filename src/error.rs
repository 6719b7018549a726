//! Error types for judgegen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// judgegen errors
#[derive(Error, Debug)]
pub enum Error {
    /// No recognizable class declaration in the solution text.
    #[error("Meta info error: {0}")]
    MetaInfo(String),

    /// A single argument token could not be parsed. Fatal: a harness
    /// generated against a misparsed signature would silently produce
    /// wrong call code, so extraction aborts instead of skipping.
    #[error("Argument parse error: {0}")]
    ArgumentParse(String),

    #[error("Too many entry methods: {0}")]
    TooManyMethods(String),

    #[error("No entry method found in class '{0}'")]
    NoEntryMethod(String),

    /// Design-style or interactive-style problem shape detected.
    #[error("Unsupported problem: {0}")]
    UnsupportedProblem(String),

    /// A declared type token has no wire shape.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Wire text violates the grammar. Tagged with the shape being
    /// decoded so failures are diagnosable per field.
    #[error("Format error {shape}: {message}")]
    Format {
        shape: &'static str,
        message: String,
    },

    #[error("Emit error: {0}")]
    Emit(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a shape-tagged format error.
    pub fn format(shape: &'static str, message: impl Into<String>) -> Self {
        Error::Format {
            shape,
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
