//! Runtime configuration from the environment.
//!
//! Command-line flags take precedence; these values are the fallback.

use std::path::PathBuf;

use crate::consts::{DEFAULT_BUILDFILE, ENV_BUILDFILE, ENV_SHELL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Buildfile to read.
  pub buildfile: PathBuf,

  /// Shell override for target commands.
  pub shell: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      buildfile: PathBuf::from(DEFAULT_BUILDFILE),
      shell: None,
    }
  }
}

impl Config {
  /// Read `MAKEOVER_FILE` and `MAKEOVER_SHELL`, ignoring empty values.
  pub fn from_env() -> Self {
    let defaults = Self::default();
    Self {
      buildfile: non_empty_var(ENV_BUILDFILE)
        .map(PathBuf::from)
        .unwrap_or(defaults.buildfile),
      shell: non_empty_var(ENV_SHELL),
    }
  }
}

fn non_empty_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|value| !value.is_empty())
}
