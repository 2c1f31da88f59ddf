mod build;
mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};

use makeover_lib::buildfile::{self, BuildModel};

pub use build::cmd_build;
pub use list::cmd_list;

/// Resolved options shared by all commands.
#[derive(Debug, Clone)]
pub struct Settings {
  pub buildfile: PathBuf,
  pub root: PathBuf,
  pub shell: Option<String>,
  pub dry_run: bool,
  pub verbose: bool,
}

/// Parse the buildfile, failing before anything is built.
fn load_model(settings: &Settings) -> Result<BuildModel> {
  buildfile::load(&settings.buildfile).context("Error parsing buildfile")
}
