//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, target listings and human-readable durations.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use makeover_lib::consts::APP_NAME;
use makeover_lib::list::TargetGroup;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

/// Print a build progress line prefixed with `[makeover]`.
pub fn print_step(message: &str) {
  let prefix = format!("[{}]", APP_NAME);
  println!(
    "{} {}",
    prefix.if_supports_color(Stream::Stdout, |s| s.bold().blue().to_string()),
    message
  );
}

/// Print a command about to run (or, in a dry run, that would run).
pub fn print_command(cmd: &str) {
  println!(
    "  {} {}",
    symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    cmd
  );
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

/// Render one group of a target listing, doc comments aligned per group.
pub fn format_group(group: &TargetGroup) -> Vec<String> {
  let width = group.name_width();
  let mut lines = vec![format!(
    "{}:",
    group.name.if_supports_color(Stream::Stdout, |s| s.bold().magenta().to_string())
  )];

  for target in &group.targets {
    let padding = " ".repeat(width - target.name.len() + 2);
    let name = target.name.if_supports_color(Stream::Stdout, |s| s.bold().blue().to_string());
    if target.doc.is_empty() {
      lines.push(format!("  {}", name));
    } else {
      let doc = format!("# {}", target.doc);
      lines.push(format!(
        "  {}{}{}",
        name,
        padding,
        doc.if_supports_color(Stream::Stdout, |s| s.dimmed().to_string())
      ));
    }
  }

  lines
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
