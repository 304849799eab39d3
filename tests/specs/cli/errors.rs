//! Error reporting specs

use crate::prelude::*;

#[test]
fn a_missing_manifest_fails_with_its_path() {
    let temp = Project::empty();

    temp.rmk().args(&["build"]).fails().stderr_has("rmk.toml");
}

#[test]
fn invalid_toml_fails_with_a_parse_error() {
    let temp = Project::with_manifest("this is [not toml");

    temp.rmk().args(&["build"]).fails().stderr_has("parse");
}

#[test]
fn a_manifest_without_rules_is_rejected() {
    let temp = Project::with_manifest("interval = \"1s\"\n");

    temp.rmk()
        .args(&["build"])
        .fails()
        .stderr_has("declares no rules");
}

#[test]
fn an_unknown_target_is_rejected() {
    let temp = Project::with_manifest(
        r#"
[[rule]]
target = "out.txt"
run = "true"
"#,
    );

    temp.rmk()
        .args(&["build", "nope.txt"])
        .fails()
        .stderr_has("unknown target: nope.txt");
}

#[test]
fn a_failing_command_fails_the_build() {
    let temp = Project::with_manifest(
        r#"
[[rule]]
target = "out.txt"
run = "false"
"#,
    );

    temp.rmk()
        .args(&["build"])
        .fails()
        .stderr_has("command failed");
}

#[test]
fn a_custom_manifest_path_is_honored() {
    let temp = Project::empty();
    temp.write(
        "build/rules.toml",
        r#"
[[rule]]
target = "out.txt"
run = "echo done > out.txt"
"#,
    );

    temp.rmk()
        .args(&["build", "--manifest", "build/rules.toml"])
        .passes();
    assert!(temp.exists("out.txt"));
}
