//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_the_subcommands() {
    let temp = Project::empty();

    temp.rmk()
        .args(&["--help"])
        .passes()
        .stdout_has("build")
        .stdout_has("watch")
        .stdout_has("list");
}

#[test]
fn version_prints_the_binary_name() {
    let temp = Project::empty();

    temp.rmk().args(&["--version"]).passes().stdout_has("rmk");
}

#[test]
fn build_help_documents_the_target_argument() {
    let temp = Project::empty();

    temp.rmk()
        .args(&["build", "--help"])
        .passes()
        .stdout_has("TARGET");
}

#[test]
fn watch_help_documents_the_intervals() {
    let temp = Project::empty();

    temp.rmk()
        .args(&["watch", "--help"])
        .passes()
        .stdout_has("--interval")
        .stdout_has("--interval-on-error");
}
