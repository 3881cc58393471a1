use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn help_main_and_subcommands() {
    // main help
    let mut cmd = Command::cargo_bin("plugin-packager").unwrap();
    cmd.arg("--help").assert().success();

    // subcommands help
    for sub in ["api-version", "stamp", "merge-xml", "append-deps", "package"] {
        let mut c = Command::cargo_bin("plugin-packager").unwrap();
        c.args([sub, "--help"]).assert().success();
    }
}
