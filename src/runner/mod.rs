//! Invocation of `tasklist.exe` and the top-level query operation
use std::process::Command;

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::TasklistError;
use crate::options::{self, Options};
use crate::records::{self, TasklistResult};

/// Name of the external utility.
pub const TASKLIST_EXE: &str = "tasklist.exe";

/// Exit status of the utility, passed through to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvocationStatus {
    /// `-1` when the process reported no exit code
    pub code: i32,
    pub success: bool,
}

/// What a finished invocation left behind. Stderr is not kept.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub status: InvocationStatus,
}

/// Runs an external program to completion and captures its stdout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CapturedOutput, TasklistError>;
}

/// Runs programs on the local host through `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CapturedOutput, TasklistError> {
        let output = Command::new(program).args(args).output()?;
        Ok(CapturedOutput {
            stdout: output.stdout,
            status: InvocationStatus {
                code: output.status.code().unwrap_or(-1),
                success: output.status.success(),
            },
        })
    }
}

/// Fail unless the host runs Windows.
pub fn ensure_supported_platform() -> Result<(), TasklistError> {
    if cfg!(windows) {
        Ok(())
    } else {
        Err(TasklistError::UnsupportedPlatform(std::env::consts::OS))
    }
}

/// Query the local (or configured remote) process list.
pub fn tasklist(options: &Options) -> Result<TasklistResult, TasklistError> {
    ensure_supported_platform()?;
    tasklist_with(&SystemRunner, options)
}

/// Same as [`tasklist`], but through the given runner and without the host check.
///
/// The utility is invoked exactly once. A non-zero exit is reported in the
/// result's status, never as an error.
pub fn tasklist_with<R: CommandRunner + ?Sized>(
    runner: &R,
    options: &Options,
) -> Result<TasklistResult, TasklistError> {
    let (args, schema) = options::prepare(options)?;

    info!("Running {} with {} arguments", TASKLIST_EXE, args.len());
    let captured = runner.run(TASKLIST_EXE, &args)?;
    if captured.status.success {
        debug!("{} exited with code {}", TASKLIST_EXE, captured.status.code);
    } else {
        warn!("{} exited with code {}", TASKLIST_EXE, captured.status.code);
    }

    let raw = String::from_utf8_lossy(&captured.stdout);
    Ok(records::assemble(
        &raw,
        schema,
        options.output_mode,
        options.field_format,
        captured.status,
    ))
}
