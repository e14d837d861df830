// src/core/toolchain.rs
use anyhow::{Context as _, Result, anyhow};
use std::io;
use std::path::Path;
use std::process::{Command, Output};

/// Captured result of one external tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs `go mod tidy` in the module root.
///
/// # Errors
///
/// Returns an error if `go` is not on the PATH or could not be spawned.
/// A tidy that runs but exits non-zero is reported through
/// [`ToolOutput::success`], not as an error.
#[inline]
pub fn run_tidy(dir: &Path) -> Result<ToolOutput> {
    run_tool(dir, "go", &["mod", "tidy"])
}

/// Runs `go build .` in the module root.
///
/// # Errors
///
/// Returns an error if `go` is not on the PATH or could not be spawned.
#[inline]
pub fn run_build(dir: &Path) -> Result<ToolOutput> {
    run_tool(dir, "go", &["build", "."])
}

/// Invokes an external tool, blocking until it exits and capturing both
/// output streams. A missing executable is distinguished from a tool
/// that ran and failed.
pub fn run_tool(dir: &Path, program: &str, args: &[&str]) -> Result<ToolOutput> {
    match Command::new(program).args(args).current_dir(dir).output() {
        Ok(output) => Ok(ToolOutput::from_output(&output)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(anyhow!("`{program}` was not found on the system PATH"))
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to run `{program} {}`", args.join(" ")))
        }
    }
}
