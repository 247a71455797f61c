//! External toolchain invocation.
//!
//! Every call into the `dotnet` CLI goes through [`CommandRunner`], which
//! spawns one process, blocks until it exits and turns a non-zero exit code
//! into a [`ToolchainError`]. There is no timeout: a hung build hangs the run.

use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

use thiserror::Error;

use crate::config::Configuration;

/// Name of the toolchain binary looked up on `PATH`.
pub const DOTNET: &str = "dotnet";

pub type ToolchainResult<T> = Result<T, ToolchainError>;

/// Failures raised while running the toolchain.
#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("Failed to start `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {}", describe_exit(.code))]
    CommandFailed {
        command: String,
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
        /// Output captured in quiet mode; empty when output was streamed
        output: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "no exit code (terminated by signal)".to_string(),
        |code| format!("exit code {code}"),
    )
}

impl ToolchainError {
    /// Exit code reported by the failed command, if any.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Launch { .. } => None,
            Self::CommandFailed { code, .. } => *code,
        }
    }

    /// Output captured from the failed command, if any.
    #[must_use]
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }
}

/// Result of a successful command.
///
/// Build dispatch only cares that a step passed and ignores this value; it
/// is returned so callers and tests can look at what a quiet run printed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Always `0`: a non-zero exit is reported as [`ToolchainError::CommandFailed`]
    pub exit_code: i32,

    /// Combined stdout and stderr; empty when output was streamed
    pub captured: String,
}

/// Runs one toolchain command to completion.
pub trait CommandRunner {
    /// Run the toolchain with `args`.
    ///
    /// With `stream_output` the child inherits the terminal; otherwise its
    /// output is captured and not shown.
    ///
    /// # Errors
    ///
    /// Returns [`ToolchainError::Launch`] if the process cannot be started and
    /// [`ToolchainError::CommandFailed`] if it exits unsuccessfully.
    fn run(&self, args: &[String], stream_output: bool) -> ToolchainResult<CommandOutput>;
}

/// Spawns a real child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DOTNET)
    }
}

impl ProcessRunner {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .map(|part| {
                if part.contains(' ') {
                    format!("\"{part}\"")
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, args: &[String], stream_output: bool) -> ToolchainResult<CommandOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());

        let launch_error = |source: io::Error| ToolchainError::Launch {
            program: self.program.clone(),
            source,
        };

        let (status, captured) = if stream_output {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            (cmd.status().map_err(launch_error)?, String::new())
        } else {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            let output = cmd.output().map_err(launch_error)?;
            let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
            captured.push_str(&String::from_utf8_lossy(&output.stderr));
            (output.status, captured)
        };

        if !status.success() {
            return Err(ToolchainError::CommandFailed {
                command: self.command_line(args),
                code: status.code(),
                output: captured,
            });
        }

        Ok(CommandOutput {
            exit_code: status.code().unwrap_or_default(),
            captured,
        })
    }
}

/// Arguments for `dotnet clean <manifest>`.
#[must_use]
pub fn clean_args(manifest: &Path) -> Vec<String> {
    vec![
        "clean".to_string(),
        manifest.to_string_lossy().into_owned(),
    ]
}

/// Arguments for `dotnet build <manifest> -c <configuration>`.
#[must_use]
pub fn build_args(manifest: &Path, configuration: Configuration) -> Vec<String> {
    vec![
        "build".to_string(),
        manifest.to_string_lossy().into_owned(),
        "-c".to_string(),
        configuration.to_string(),
    ]
}
