//! Command execution abstraction for testability.
//!
//! The only external command is `hostname`, used for the header lines of
//! the generated file. Tests mock it through [`CommandExecutor`].

use std::io;
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;

use crate::error::{HostsError, Result};

/// Output from command execution
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
}

/// Trait for command execution, allowing dependency injection for testing.
#[cfg_attr(test, automock)]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with the given arguments.
    fn execute(&self, cmd: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Real implementation of CommandExecutor that runs actual system commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, cmd: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(cmd)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

/// Look up the local hostname by running `hostname`.
///
/// The value is used verbatim in the hosts header; it is not validated.
pub fn local_hostname(executor: &dyn CommandExecutor) -> Result<String> {
    let output = executor
        .execute("hostname", &[])
        .map_err(|e| HostsError::Hostname(e.to_string()))?;

    if !output.success {
        return Err(HostsError::Hostname(output.stderr.trim().to_string()));
    }

    let hostname = output.stdout.trim();
    if hostname.is_empty() {
        return Err(HostsError::Hostname("empty hostname".to_string()));
    }
    Ok(hostname.to_string())
}
