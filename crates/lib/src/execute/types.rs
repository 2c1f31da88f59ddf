//! Types for target execution.
//!
//! This module defines the error type, the per-build report and the
//! configuration for running targets from a [`BuildModel`](crate::buildfile::BuildModel).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a target.
///
/// Every variant is terminal for the top-level build that raised it.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// A target depends, directly or transitively, on itself.
  #[error("Circular dependency detected involving {0}")]
  CircularDependency(String),

  /// A name is neither a target nor an existing file.
  #[error("No rule to make target '{0}' and file not found.")]
  NoRuleToMake(String),

  /// A command exited unsuccessfully.
  #[error("Command failed: {cmd}")]
  CommandFailed { cmd: String, code: Option<i32> },

  /// The shell could not be launched.
  #[error("failed to spawn shell for '{cmd}': {source}")]
  Spawn {
    cmd: String,
    #[source]
    source: std::io::Error,
  },
}

/// Configuration for target execution.
///
/// The shell is not configured here; it belongs to the
/// [`CommandRunner`](super::CommandRunner), see [`ShellRunner::new`](super::ShellRunner::new).
#[derive(Debug, Clone)]
pub struct ExecuteConfig {
  /// Directory file names are resolved against and commands run in.
  pub root: PathBuf,

  /// Report commands without running them.
  pub dry_run: bool,
}

impl Default for ExecuteConfig {
  fn default() -> Self {
    Self {
      root: PathBuf::from("."),
      dry_run: false,
    }
  }
}

/// What happened to one name reached during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// The target was stale and its commands ran.
  Rebuilt,
  /// The target was fresh; nothing ran.
  UpToDate,
  /// The name is a plain file that exists.
  Source,
}

/// Result of one top-level build.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
  /// Outcomes in completion order (dependencies before dependents).
  ///
  /// A shared dependency reached along several paths appears once per path.
  pub outcomes: Vec<(String, Outcome)>,

  /// Number of commands executed (or, in a dry run, that would have been).
  pub commands_run: usize,
}

impl BuildReport {
  /// Targets whose commands ran, in order.
  pub fn rebuilt(&self) -> impl Iterator<Item = &str> {
    self
      .outcomes
      .iter()
      .filter(|(_, outcome)| *outcome == Outcome::Rebuilt)
      .map(|(name, _)| name.as_str())
  }

  /// Whether nothing needed to be done.
  pub fn is_up_to_date(&self) -> bool {
    self.rebuilt().next().is_none()
  }

  pub(crate) fn record(&mut self, name: &str, outcome: Outcome) {
    self.outcomes.push((name.to_string(), outcome));
  }
}

/// Receives progress notifications while targets are built.
///
/// All methods default to doing nothing; `()` is the silent observer.
pub trait BuildObserver {
  /// A stale target is about to run its commands.
  fn target_started(&mut self, _target: &str) {}

  /// A target is fresh and will not run.
  fn target_up_to_date(&mut self, _target: &str) {}

  /// A fully expanded command is about to run.
  fn command(&mut self, _cmd: &str) {}
}

impl BuildObserver for () {}

impl<T: BuildObserver + ?Sized> BuildObserver for &mut T {
  fn target_started(&mut self, target: &str) {
    (**self).target_started(target)
  }

  fn target_up_to_date(&mut self, target: &str) {
    (**self).target_up_to_date(target)
  }

  fn command(&mut self, cmd: &str) {
    (**self).command(cmd)
  }
}
