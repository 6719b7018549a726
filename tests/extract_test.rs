//! Signature extraction tests over template-dialect inputs

use judgegen::{extract, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_two_sum_signature() {
    let sig = extract(
        r#"
class Solution {
public:
    vector<int> twoSum(vector<int>& nums, int target) {

    }
};
"#,
    )
    .unwrap();

    assert_eq!(sig.class_name, "Solution");
    assert_eq!(sig.return_type, "vector<int>");
    assert_eq!(sig.method_name, "twoSum");
    let args: Vec<(String, String)> = sig
        .arguments
        .iter()
        .map(|a| (a.cpp_type.clone(), a.name.clone()))
        .collect();
    assert_eq!(
        args,
        vec![
            ("vector<int>&".to_string(), "nums".to_string()),
            ("int".to_string(), "target".to_string()),
        ]
    );
    assert!(!sig.is_design_problem);
    assert!(!sig.is_interactive_problem);
}

#[rstest]
#[case("bool isPalindrome(int x)", "bool", "isPalindrome")]
#[case("double myPow(double x, int n)", "double", "myPow")]
#[case("string longestPalindrome(string s)", "string", "longestPalindrome")]
#[case("long long maxRunTime(int n, vector<int>& batteries)", "long long", "maxRunTime")]
#[case("TreeNode* invertTree(TreeNode* root)", "TreeNode*", "invertTree")]
#[case("ListNode* reverseList(ListNode* head)", "ListNode*", "reverseList")]
fn test_method_variants(
    #[case] decl: &str,
    #[case] return_type: &str,
    #[case] method_name: &str,
) {
    let source = format!(
        "class Solution {{\npublic:\n    {} {{\n    }}\n}};\n",
        decl
    );
    let sig = extract(&source).unwrap();
    assert_eq!(sig.return_type, return_type);
    assert_eq!(sig.method_name, method_name);
}

#[test]
fn test_no_class_is_meta_info_error() {
    let err = extract("// just a comment\nint main() {}\n").unwrap_err();
    assert!(matches!(err, Error::MetaInfo(_)));
}

#[test]
fn test_empty_class_has_no_entry_method() {
    let err = extract("class Solution {\npublic:\n};\n").unwrap_err();
    assert!(matches!(err, Error::NoEntryMethod(_)));
}

#[test]
fn test_two_methods_rejected() {
    let err = extract(
        r#"
class Solution {
public:
    int encode(vector<string>& strs) {
    }
    int decode(string s) {
    }
};
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::TooManyMethods(_)));
}

#[test]
fn test_design_class_rejected_even_with_many_methods() {
    // the class-name check wins over the method count
    let err = extract(
        r#"
class LRUCache {
public:
    LRUCache(int capacity) {
    }
    int get(int key) {
    }
    void put(int key, int value) {
    }
};
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnsupportedProblem(_)));
}

#[test]
fn test_interactive_prototype_rejected() {
    let err = extract(
        r#"
// Forward declaration of the judge API.
int guess(int num);

class Solution {
public:
    int guessNumber(int n) {
    }
};
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnsupportedProblem(_)));
}

#[test]
fn test_nested_template_argument_is_fatal() {
    let err = extract(
        r#"
class Solution {
public:
    int orangesRotting(vector<vector<int>>& grid) {
    }
};
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::ArgumentParse(_)));
}

#[test]
fn test_method_body_lines_not_mistaken_for_members() {
    // statements inside the body sit deeper than class-member depth
    let sig = extract(
        r#"
class Solution {
public:
    int fib(int n) {
        int memo = helper(n);
        return memo;
    }
};
"#,
    )
    .unwrap();
    assert_eq!(sig.method_name, "fib");
}
