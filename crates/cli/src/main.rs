mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use makeover_lib::config::Config;

use crate::cmd::Settings;
use crate::output::{OutputFormat, print_error};

/// makeover - rebuild stale targets from a buildfile
#[derive(Parser)]
#[command(name = "makeover")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Targets to build, in order (default: the first target in the buildfile)
  targets: Vec<String>,

  /// Path to the buildfile [env: MAKEOVER_FILE] [default: buildfile]
  #[arg(short, long)]
  file: Option<PathBuf>,

  /// Change to DIR before reading the buildfile and building
  #[arg(short = 'C', long, value_name = "DIR")]
  directory: Option<PathBuf>,

  /// List available targets grouped by section
  #[arg(short, long)]
  list: bool,

  /// Print the commands that would run without running them
  #[arg(short = 'n', long)]
  dry_run: bool,

  /// Shell used to run commands [env: MAKEOVER_SHELL]
  #[arg(long)]
  shell: Option<String>,

  /// Output format for --list
  #[arg(long, value_enum, default_value_t)]
  format: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  /// Merge flags over environment configuration.
  fn settings(&self) -> Settings {
    let config = Config::from_env();
    let root = self.directory.clone().unwrap_or_else(|| PathBuf::from("."));
    let buildfile = root.join(self.file.as_ref().unwrap_or(&config.buildfile));

    Settings {
      buildfile,
      root,
      shell: self.shell.clone().or(config.shell),
      dry_run: self.dry_run,
      verbose: self.verbose,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let settings = cli.settings();
  let result = if cli.list {
    cmd::cmd_list(&settings, cli.format)
  } else {
    cmd::cmd_build(&settings, &cli.targets)
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}
