//! Target selection, ordering, and introspection specs

use crate::prelude::*;

const TWO_RULES: &str = r#"
[[rule]]
target = "first.txt"
run = "echo one > first.txt"

[[rule]]
target = "second.txt"
deps = ["first.txt"]
run = "cp first.txt second.txt"
"#;

#[test]
fn a_full_build_runs_rules_in_manifest_order() {
    let temp = Project::with_manifest(TWO_RULES);

    temp.rmk().args(&["build"]).passes();

    assert_eq!(temp.read("second.txt"), "one\n");
}

#[test]
fn a_named_target_builds_only_that_rule() {
    let temp = Project::with_manifest(TWO_RULES);

    temp.rmk().args(&["build", "first.txt"]).passes();

    assert!(temp.exists("first.txt"));
    assert!(!temp.exists("second.txt"));
}

#[test]
fn directory_deps_are_expanded_for_listing() {
    let temp = Project::with_manifest(
        r#"
[[rule]]
target = "bundle.txt"
deps = ["src"]
run = "cat src/* > bundle.txt"
"#,
    );
    temp.write("src/a.txt", "a");
    temp.write("src/b.txt", "b");

    temp.rmk()
        .args(&["list"])
        .passes()
        .stdout_has("bundle.txt")
        .stdout_has("a.txt")
        .stdout_has("b.txt");
}

#[test]
fn a_directory_touch_triggers_a_rebuild() {
    let temp = Project::with_manifest(
        r#"
[[rule]]
target = "bundle.txt"
deps = ["src"]
run = "cat src/* > bundle.txt"
"#,
    );
    temp.write("src/a.txt", "a");
    temp.rmk().args(&["build"]).passes();
    assert_eq!(temp.read("bundle.txt"), "a");

    temp.write("src/a.txt", "changed");
    temp.set_mtime_after("src/a.txt", "bundle.txt", std::time::Duration::from_secs(60));
    temp.rmk().args(&["build"]).passes();

    assert_eq!(temp.read("bundle.txt"), "changed");
}
