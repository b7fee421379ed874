use std::{
    path::Path,
    process::{Command, Output},
};

/// Runs the `prelude` binary with `args`, pointing `HOME` at `home` so the
/// configuration file lands in an isolated directory.
pub fn prelude(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prelude"))
        .args(args)
        .env("HOME", home)
        .output()
        .expect("should be able to run the prelude binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
