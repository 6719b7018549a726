//! Template context structures
//!
//! Converts a recovered signature and the emission environment into the
//! data the program skeleton template renders.

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::lifecycle::SHARED_DEFS_FILE;
use crate::signature::MethodSignature;
use crate::{emit::driver, templates};

/// Context for rendering the generated program
#[derive(Debug, Clone, Serialize)]
pub struct HarnessContext {
    /// Solution file name, for the provenance header
    pub solution_file: String,
    /// Include path of the original solution
    pub solution_include: String,
    /// Include path of the shared definitions header
    pub defs_include: String,
    /// SHA-256 of the solution source
    pub source_hash: String,
    /// Generation timestamp
    pub generated_at: String,
    /// Static codec support code
    pub support: String,
    /// Generated driver statements
    pub driver_body: String,
    /// Solution class name
    pub class_name: String,
    /// Entry method name
    pub method_name: String,
}

impl HarnessContext {
    pub fn build(
        signature: &MethodSignature,
        solution_source: &str,
        solution_file: &str,
    ) -> Result<Self> {
        Ok(Self {
            solution_file: solution_file.to_string(),
            solution_include: solution_file.to_string(),
            defs_include: SHARED_DEFS_FILE.to_string(),
            source_hash: hex::encode(Sha256::digest(solution_source.as_bytes())),
            generated_at: Utc::now().to_rfc3339(),
            support: templates::support_code().to_string(),
            driver_body: driver::driver_body(signature)?,
            class_name: signature.class_name.clone(),
            method_name: signature.method_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::extract;

    #[test]
    fn test_context_carries_provenance() {
        let sig = extract(
            r#"
class Solution {
public:
    int climbStairs(int n) {
    }
};
"#,
        )
        .unwrap();
        let ctx = HarnessContext::build(&sig, "class Solution {};", "climb.cpp").unwrap();
        assert_eq!(ctx.solution_include, "climb.cpp");
        assert_eq!(ctx.source_hash.len(), 64);
        assert_eq!(ctx.class_name, "Solution");
        assert!(ctx.support.contains("namespace harness"));
    }
}
