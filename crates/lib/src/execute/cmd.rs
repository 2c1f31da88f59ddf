//! Shell command execution.
//!
//! Commands are handed to a shell as literal text so that pipes, globs and
//! operators in buildfiles behave as their authors expect.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

/// Exit status of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
  Success,
  /// Non-zero exit; `None` if the process was killed by a signal.
  Failed(Option<i32>),
}

/// Runs a shell command and reports its exit status.
///
/// This is the only place a build touches process execution, so tests can
/// substitute a recording implementation.
pub trait CommandRunner {
  /// Run `cmd` in `cwd`, blocking until it exits.
  fn run(&mut self, cmd: &str, cwd: &Path) -> std::io::Result<CommandStatus>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
  fn run(&mut self, cmd: &str, cwd: &Path) -> std::io::Result<CommandStatus> {
    (**self).run(cmd, cwd)
  }
}

/// Runs commands through the system shell with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
  shell: Option<String>,
}

impl ShellRunner {
  /// Use `shell` instead of the platform default (/bin/sh on Unix, cmd.exe on Windows).
  pub fn new(shell: Option<String>) -> Self {
    Self { shell }
  }
}

impl CommandRunner for ShellRunner {
  fn run(&mut self, cmd: &str, cwd: &Path) -> std::io::Result<CommandStatus> {
    info!(cmd = %cmd, "executing command");

    let (shell_cmd, shell_args) = get_shell(self.shell.as_deref());
    debug!(shell = %shell_cmd, working_dir = ?cwd, "spawning process");

    let status = Command::new(&shell_cmd)
      .args(&shell_args)
      .arg(cmd)
      .current_dir(cwd)
      .status()?;

    if status.success() {
      Ok(CommandStatus::Success)
    } else {
      debug!(code = ?status.code(), "command exited unsuccessfully");
      Ok(CommandStatus::Failed(status.code()))
    }
  }
}

/// Get the shell command and arguments for the current platform.
///
/// An override picks its flag from the shell's name: PowerShell gets
/// `-NoProfile -Command`, cmd gets `/C`, anything else is assumed to be a Unix
/// shell taking `-c`.
fn get_shell(override_shell: Option<&str>) -> (String, Vec<String>) {
  if let Some(shell) = override_shell {
    let args = if shell.contains("powershell") || shell.contains("pwsh") {
      vec!["-NoProfile".to_string(), "-Command".to_string()]
    } else if shell.contains("cmd") {
      vec!["/C".to_string()]
    } else {
      vec!["-c".to_string()]
    };
    return (shell.to_string(), args);
  }

  #[cfg(unix)]
  {
    ("/bin/sh".to_string(), vec!["-c".to_string()])
  }

  #[cfg(windows)]
  {
    ("cmd.exe".to_string(), vec!["/C".to_string()])
  }
}
