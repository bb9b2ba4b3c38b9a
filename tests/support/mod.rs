#![allow(dead_code)]

pub mod mesh;

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Command for the binary, run inside `dir` so no stray config is picked up.
pub fn viewfinder(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("viewfinder");
    cmd.current_dir(dir).env_remove("RUST_LOG").arg("--color=never");
    cmd
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test file");
    path
}
