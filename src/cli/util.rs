//! CLI utility helpers

use std::path::PathBuf;

/// Value of a `--flag <value>` pair, if present
pub fn parse_value_arg(args: &[String], flag: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if arg == flag {
            if let Some(value) = args.get(i + 1) {
                return Some(value.clone());
            }
        }
    }
    None
}

/// Path value of a `--flag <path>` pair, if present
pub fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_value_arg(args, flag).map(PathBuf::from)
}

/// Whether a bare flag is present
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
