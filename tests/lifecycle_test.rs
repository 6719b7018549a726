//! Artifact lifecycle and debugger session tests

use judgegen::lifecycle::{defs_include_line, insert_defs_include, remove_defs_include};
use judgegen::{
    debugger_for, ArtifactPaths, FileTemplateProvider, SolutionContext, TemplateProvider,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const TWO_SUM: &str = r#"class Solution {
public:
    vector<int> twoSum(vector<int>& nums, int target) {

    }
};
"#;

#[test]
fn test_artifact_paths_are_deterministic() {
    let paths = ArtifactPaths::for_solution(Path::new("/ws/p/add-two-numbers.cpp")).unwrap();
    assert_eq!(paths.shared_defs, Path::new("/ws/p/harness_defs.h"));
    assert_eq!(paths.program, Path::new("/ws/p/add-two-numbers_harness.cpp"));
}

#[test]
fn test_include_insert_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let solution = dir.path().join("two-sum.cpp");
    fs::write(&solution, TWO_SUM).unwrap();

    assert!(insert_defs_include(&solution).unwrap());
    let mutated = fs::read_to_string(&solution).unwrap();
    assert_eq!(mutated.lines().next().unwrap(), defs_include_line());

    // inserting again is a no-op
    assert!(!insert_defs_include(&solution).unwrap());

    assert!(remove_defs_include(&solution).unwrap());
    assert_eq!(fs::read_to_string(&solution).unwrap(), TWO_SUM);

    // nothing left to remove
    assert!(!remove_defs_include(&solution).unwrap());
}

#[test]
fn test_remove_is_noop_when_first_line_changed() {
    let dir = tempfile::tempdir().unwrap();
    let solution = dir.path().join("two-sum.cpp");
    let edited = format!("// user edit\n{}", TWO_SUM);
    fs::write(&solution, &edited).unwrap();

    assert!(!remove_defs_include(&solution).unwrap());
    assert_eq!(fs::read_to_string(&solution).unwrap(), edited);
}

#[test]
fn test_cpp_debugger_session() {
    let dir = tempfile::tempdir().unwrap();
    let solution = dir.path().join("two-sum.cpp");
    fs::write(&solution, TWO_SUM).unwrap();

    let ctx = SolutionContext::new(&solution, "cpp");
    let mut debugger = debugger_for("cpp", ctx, TWO_SUM.to_string()).unwrap();

    let entry = debugger.init().unwrap().expect("entry path");
    assert_eq!(entry, dir.path().join("two-sum_harness.cpp"));
    assert!(entry.exists());

    // solution gained the shared-definitions include
    let mutated = fs::read_to_string(&solution).unwrap();
    assert_eq!(mutated.lines().next().unwrap(), defs_include_line());

    debugger.dispose().unwrap();
    assert_eq!(fs::read_to_string(&solution).unwrap(), TWO_SUM);

    // dispose is exactly-once: a second call must not strip user lines
    fs::write(&solution, format!("{}\nmore", defs_include_line())).unwrap();
    debugger.dispose().unwrap();
    assert_eq!(
        fs::read_to_string(&solution).unwrap(),
        format!("{}\nmore", defs_include_line())
    );
}

#[test]
fn test_debugger_abstains_on_design_problem() {
    let template = r#"class MinStack {
public:
    MinStack() {
    }
    void push(int val) {
    }
};
"#;
    let dir = tempfile::tempdir().unwrap();
    let solution = dir.path().join("min-stack.cpp");
    fs::write(&solution, template).unwrap();

    let ctx = SolutionContext::new(&solution, "cpp");
    let mut debugger = debugger_for("cpp", ctx, template.to_string()).unwrap();

    assert!(debugger.init().unwrap().is_none());
    // abstained: no artifacts, no mutation
    assert!(!dir.path().join("harness_defs.h").exists());
    assert_eq!(fs::read_to_string(&solution).unwrap(), template);
    debugger.dispose().unwrap();
}

#[test]
fn test_file_template_provider_lookup() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1.cpp"), TWO_SUM).unwrap();

    let provider = FileTemplateProvider::new(dir.path());
    assert_eq!(provider.code_template(1, "cpp").unwrap(), TWO_SUM);
    assert!(provider.code_template(2, "cpp").is_err());
    assert!(provider.code_template(1, "ocaml").is_err());
}

#[test]
fn test_unsupported_language_abstains_entirely() {
    let ctx = SolutionContext::new("/tmp/solution.rs", "rust");
    assert!(debugger_for("rust", ctx, String::new()).is_none());
}
