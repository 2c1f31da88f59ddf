//! Implementation of the default build command.
//!
//! Each requested target is an independent top-level build; the first
//! failure stops the remaining ones from starting.

use std::time::Instant;

use anyhow::{Result, anyhow};
use tracing::info;

use makeover_lib::execute::{BuildObserver, ExecuteConfig, Executor, ShellRunner};

use crate::output::{self, format_duration, print_info, print_step, print_success};

use super::{Settings, load_model};

/// Prints build progress to the console.
struct ConsoleObserver {
  echo_commands: bool,
}

impl BuildObserver for ConsoleObserver {
  fn target_started(&mut self, target: &str) {
    print_step(&format!("Building target: {}", target));
  }

  fn target_up_to_date(&mut self, target: &str) {
    print_step(&format!("Target '{}' is up to date.", target));
  }

  fn command(&mut self, cmd: &str) {
    if self.echo_commands {
      output::print_command(cmd);
    }
  }
}

pub fn cmd_build(settings: &Settings, targets: &[String]) -> Result<()> {
  let model = load_model(settings)?;

  let goals: Vec<String> = if targets.is_empty() {
    match model.first_target() {
      Some(first) => vec![first.to_string()],
      None => {
        print_info("No targets found in buildfile.");
        return Ok(());
      }
    }
  } else {
    targets.to_vec()
  };

  let config = ExecuteConfig {
    root: settings.root.clone(),
    dry_run: settings.dry_run,
  };
  let observer = ConsoleObserver {
    echo_commands: settings.dry_run || settings.verbose,
  };
  let mut executor = Executor::new(&model, ShellRunner::new(settings.shell.clone()))
    .with_config(config)
    .with_observer(observer);

  let start = Instant::now();
  let mut commands_run = 0;
  for goal in &goals {
    let report = executor.build(goal).map_err(|err| anyhow!("Error: {}", err))?;
    commands_run += report.commands_run;
  }

  info!(goals = goals.len(), commands = commands_run, "all goals finished");
  let verb = if settings.dry_run { "Would run" } else { "Ran" };
  print_success(&format!(
    "{} {} command(s) in {}",
    verb,
    commands_run,
    format_duration(start.elapsed())
  ));

  Ok(())
}
