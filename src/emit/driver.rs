//! Per-problem driver generation
//!
//! Builds the body of the generated `runCase` function: one local per
//! argument, decoded from the cursor in declaration order, the solution
//! call, and the return-value encode.

use crate::codec::Shape;
use crate::error::Result;
use crate::signature::MethodSignature;

/// Build the driver body for a signature. Validates along the way that
/// every argument and the return type have a wire shape.
pub fn driver_body(signature: &MethodSignature) -> Result<String> {
    // return value must be encodable before any code is produced
    Shape::from_cpp_type(&signature.return_type)?;

    let mut out = String::new();
    for (i, arg) in signature.arguments.iter().enumerate() {
        let shape = Shape::from_cpp_type(&arg.cpp_type)?;
        out.push_str(&format!(
            "{} {}{};\n",
            local_type(&arg.cpp_type),
            arg.name,
            local_init(&shape)
        ));
        out.push_str(&format!("harness::readValue(cur, {});\n", arg.name));
        out.push_str(&format!(
            "harness::finishValue(cur, \"{}\");\n",
            shape.tag()
        ));
        if i + 1 < signature.arguments.len() {
            out.push_str("harness::expectArgSeparator(cur);\n");
        }
    }
    out.push_str("harness::finishRecord(cur);\n");

    let names: Vec<&str> = signature.arguments.iter().map(|a| a.name.as_str()).collect();
    out.push_str(&format!("{} solution;\n", signature.class_name));
    out.push_str(&format!(
        "auto result = solution.{}({});\n",
        signature.method_name,
        names.join(", ")
    ));
    out.push_str("harness::writeValue(out, result);\n");
    out.push_str("out.write(\"\\n\");\n");
    out.push_str("out.flush();");

    Ok(out)
}

/// Local variable type: declared type minus reference qualifiers.
fn local_type(cpp_type: &str) -> &str {
    cpp_type.trim_end_matches('&').trim_end()
}

/// Initializer matching the local's shape so no scalar is read before
/// a decode assigns it.
fn local_init(shape: &Shape) -> &'static str {
    match shape {
        Shape::Int => " = 0",
        Shape::Float => " = 0",
        Shape::Bool => " = false",
        Shape::Tree | Shape::List => " = nullptr",
        Shape::Str | Shape::Seq(_) | Shape::Tuple(_) => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::extract;

    #[test]
    fn test_driver_decodes_in_declaration_order() {
        let sig = extract(
            r#"
class Solution {
public:
    int search(vector<int>& nums, int target) {
    }
};
"#,
        )
        .unwrap();
        let body = driver_body(&sig).unwrap();

        let nums_read = body.find("harness::readValue(cur, nums)").unwrap();
        let target_read = body.find("harness::readValue(cur, target)").unwrap();
        let call = body.find("solution.search(nums, target)").unwrap();
        assert!(nums_read < target_read);
        assert!(target_read < call);
        assert_eq!(body.matches("expectArgSeparator").count(), 1);
        assert_eq!(body.matches("finishRecord").count(), 1);
    }

    #[test]
    fn test_driver_strips_reference_for_local() {
        let sig = extract(
            r#"
class Solution {
public:
    int singleNumber(vector<int>& nums) {
    }
};
"#,
        )
        .unwrap();
        let body = driver_body(&sig).unwrap();
        assert!(body.contains("vector<int> nums;"));
        assert!(!body.contains("vector<int>& nums;"));
    }

    #[test]
    fn test_driver_rejects_unsupported_return() {
        let sig = extract(
            r#"
class Solution {
public:
    Node* cloneGraph(Node* node) {
    }
};
"#,
        )
        .unwrap();
        assert!(driver_body(&sig).is_err());
    }

    #[test]
    fn test_tree_argument_defaults_to_nullptr() {
        let sig = extract(
            r#"
class Solution {
public:
    int maxDepth(TreeNode* root) {
    }
};
"#,
        )
        .unwrap();
        let body = driver_body(&sig).unwrap();
        assert!(body.contains("TreeNode* root = nullptr;"));
    }
}
