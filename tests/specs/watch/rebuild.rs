//! Perpetual watch specs
//!
//! These drive a real `rmk watch` process and poll the filesystem for
//! its effects, so they use generous deadlines.

use crate::prelude::*;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

const MANIFEST: &str = r#"
interval = "50ms"
interval_on_error = "50ms"

[[rule]]
target = "out.txt"
deps = ["in.txt"]
run = "cp in.txt out.txt"
"#;

/// Kills the watcher even when an assertion panics first.
struct Watcher(Child);

impl Drop for Watcher {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn spawn_watch(temp: &Project) -> Watcher {
    let child = Command::new(assert_cmd::cargo::cargo_bin("rmk"))
        .arg("watch")
        .current_dir(temp.path())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    Watcher(child)
}

fn wait_until(what: &str, mut check: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if check() {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    panic!("timed out waiting for {what}");
}

#[test]
fn watch_builds_and_then_tracks_input_changes() {
    let temp = Project::with_manifest(MANIFEST);
    temp.write("in.txt", "one");

    let _watcher = spawn_watch(&temp);

    // First tick produces the target.
    wait_until("initial build", || {
        temp.exists("out.txt") && temp.read("out.txt") == "one"
    });

    // A touched input is picked up on a later tick.
    temp.write("in.txt", "two");
    wait_until("rebuild after touch", || temp.read("out.txt") == "two");
}

#[test]
fn watch_survives_failing_ticks() {
    let temp = Project::with_manifest(
        r#"
interval = "50ms"
interval_on_error = "50ms"

[[rule]]
target = "out.txt"
deps = ["in.txt"]
run = "cp in.txt out.txt"

[[rule]]
target = "never.txt"
run = "false"
"#,
    );
    temp.write("in.txt", "one");

    let _watcher = spawn_watch(&temp);

    // The failing second rule must not stop later ticks from seeing
    // input changes.
    wait_until("initial build", || temp.exists("out.txt"));
    temp.write("in.txt", "two");
    wait_until("rebuild after touch", || temp.read("out.txt") == "two");
}
