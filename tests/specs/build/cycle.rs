//! The build/skip/rebuild cycle, end to end

use crate::prelude::*;
use std::time::Duration;

/// Copies the input and leaves a log line behind for every execution.
const MANIFEST: &str = r#"
[[rule]]
target = "out.txt"
deps = ["in.txt"]
run = "echo ran >> build.log && cp in.txt out.txt"
"#;

fn executions(temp: &Project) -> usize {
    if temp.exists("build.log") {
        temp.read("build.log").lines().count()
    } else {
        0
    }
}

#[test]
fn a_missing_target_is_built() {
    let temp = Project::with_manifest(MANIFEST);
    temp.write("in.txt", "hello");
    temp.set_mtime("in.txt", 1000);

    temp.rmk().args(&["build"]).passes();

    assert_eq!(temp.read("out.txt"), "hello");
    assert_eq!(executions(&temp), 1);
}

#[test]
fn a_strictly_newer_target_is_left_alone() {
    let temp = Project::with_manifest(MANIFEST);
    temp.write("in.txt", "new input");
    temp.write("out.txt", "old output");
    temp.set_mtime("in.txt", 1000);
    temp.set_mtime("out.txt", 2000);

    temp.rmk().args(&["build"]).passes();

    assert_eq!(temp.read("out.txt"), "old output");
    assert_eq!(executions(&temp), 0);
}

#[test]
fn an_mtime_tie_rebuilds() {
    let temp = Project::with_manifest(MANIFEST);
    temp.write("in.txt", "same second");
    temp.write("out.txt", "old output");
    temp.set_mtime("in.txt", 1000);
    temp.set_mtime("out.txt", 1000);

    temp.rmk().args(&["build"]).passes();

    assert_eq!(temp.read("out.txt"), "same second");
    assert_eq!(executions(&temp), 1);
}

#[test]
fn repeated_builds_only_rerun_after_a_touch() {
    let temp = Project::with_manifest(MANIFEST);
    temp.write("in.txt", "v1");
    temp.set_mtime("in.txt", 1000);

    // First pass builds, second pass is a no-op.
    temp.rmk().args(&["build"]).passes();
    temp.rmk().args(&["build"]).passes();
    assert_eq!(executions(&temp), 1);

    // Touch the input past the target and it rebuilds once more.
    temp.write("in.txt", "v2");
    temp.set_mtime_after("in.txt", "out.txt", Duration::from_secs(100));
    temp.rmk().args(&["build"]).passes();

    assert_eq!(executions(&temp), 2);
    assert_eq!(temp.read("out.txt"), "v2");
}
