//! Custom MiniJinja filters for code generation

use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("indent", indent);
}

/// Add indentation to each non-empty line, the first included.
fn indent(value: &str, spaces: usize) -> String {
    let indent_str = " ".repeat(spaces);
    value
        .lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent_str, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\n\nb", 4), "    a\n\n    b");
    }
}
