//! Target execution.
//!
//! This module builds a requested target from a [`BuildModel`]:
//! - depth-first resolution of dependencies, in listed order
//! - cycle detection along the active dependency path
//! - timestamp-based staleness checks
//! - sequential command execution, stopping at the first failure
//!
//! The visited set is copied into each dependency, not shared between
//! siblings. Two siblings that share a dependency therefore don't trip cycle
//! detection, but that shared dependency is visited (and, if stale, rebuilt)
//! once per path that reaches it.

pub mod cmd;
pub mod staleness;
pub mod types;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::buildfile::BuildModel;
use crate::expand::expand;

pub use cmd::{CommandRunner, CommandStatus, ShellRunner};
pub use staleness::needs_rebuild;
pub use types::{BuildObserver, BuildReport, ExecuteConfig, ExecuteError, Outcome};

/// Builds targets of one [`BuildModel`].
///
/// The model is never modified; one executor can run several top-level
/// builds one after the other.
pub struct Executor<'m, R, O = ()> {
  model: &'m BuildModel,
  runner: R,
  observer: O,
  config: ExecuteConfig,
}

impl<'m, R: CommandRunner> Executor<'m, R> {
  pub fn new(model: &'m BuildModel, runner: R) -> Self {
    Self {
      model,
      runner,
      observer: (),
      config: ExecuteConfig::default(),
    }
  }
}

impl<'m, R: CommandRunner, O: BuildObserver> Executor<'m, R, O> {
  pub fn with_config(mut self, config: ExecuteConfig) -> Self {
    self.config = config;
    self
  }

  pub fn with_observer<O2: BuildObserver>(self, observer: O2) -> Executor<'m, R, O2> {
    Executor {
      model: self.model,
      runner: self.runner,
      observer,
      config: self.config,
    }
  }

  /// Build `name` and everything it depends on.
  ///
  /// `name` may also be a plain file, which succeeds if it exists.
  ///
  /// # Errors
  ///
  /// - `CircularDependency` if `name` is reachable from itself
  /// - `NoRuleToMake` if a name is neither a target nor an existing file
  /// - `CommandFailed` / `Spawn` if a command fails; no further commands run
  pub fn build(&mut self, name: &str) -> Result<BuildReport, ExecuteError> {
    info!(name = %name, dry_run = self.config.dry_run, "starting build");

    let mut report = BuildReport::default();
    self.build_target(name, HashSet::new(), &mut report)?;

    info!(
      name = %name,
      rebuilt = report.rebuilt().count(),
      commands = report.commands_run,
      "build complete"
    );
    Ok(report)
  }

  fn build_target(
    &mut self,
    name: &str,
    mut visited: HashSet<String>,
    report: &mut BuildReport,
  ) -> Result<(), ExecuteError> {
    if !visited.insert(name.to_string()) {
      return Err(ExecuteError::CircularDependency(name.to_string()));
    }

    let model = self.model;
    let Some(target) = model.target(name) else {
      if self.config.root.join(name).exists() {
        debug!(file = %name, "source file present");
        report.record(name, Outcome::Source);
        return Ok(());
      }
      return Err(ExecuteError::NoRuleToMake(name.to_string()));
    };

    for dep in &target.dependencies {
      self.build_target(dep, visited.clone(), report)?;
    }

    if !needs_rebuild(&self.config.root, target, model) {
      info!(name = %name, "target is up to date");
      self.observer.target_up_to_date(name);
      report.record(name, Outcome::UpToDate);
      return Ok(());
    }

    info!(name = %name, commands = target.commands.len(), "building target");
    self.observer.target_started(name);

    for raw in &target.commands {
      let cmd = expand(raw, model.variables());
      self.observer.command(&cmd);
      report.commands_run += 1;

      if self.config.dry_run {
        continue;
      }

      match self.runner.run(&cmd, &self.config.root) {
        Ok(CommandStatus::Success) => {}
        Ok(CommandStatus::Failed(code)) => return Err(ExecuteError::CommandFailed { cmd, code }),
        Err(source) => return Err(ExecuteError::Spawn { cmd, source }),
      }
    }

    report.record(name, Outcome::Rebuilt);
    Ok(())
  }
}
