//! Types for the parsed buildfile.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or parsing a buildfile.
#[derive(Debug, Error)]
pub enum BuildfileError {
  /// The buildfile does not exist.
  #[error("Buildfile '{}' not found.", .0.display())]
  NotFound(PathBuf),

  /// The buildfile exists but could not be read.
  #[error("failed to read buildfile '{}': {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A top-level line matched none of the recognized forms.
  #[error("Line {line}: {reason}")]
  Syntax { line: usize, reason: String },

  /// An indented command line appeared before any target.
  #[error("Line {line}: Command found outside of target block.")]
  OrphanCommand { line: usize },
}

/// A named, buildable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
  pub name: String,

  /// Target or file names, built in this order. Duplicates are kept.
  pub dependencies: Vec<String>,

  /// Raw shell commands; variables are expanded at execution time.
  pub commands: Vec<String>,

  /// Joined doc comments preceding the definition, possibly empty.
  pub doc: String,

  pub group: String,
}

/// Variables and targets of one parsed buildfile.
#[derive(Debug, Clone, Default)]
pub struct BuildModel {
  variables: HashMap<String, String>,
  targets: BTreeMap<String, Target>,

  /// Target names in the order they were first defined.
  order: Vec<String>,

  first_target: Option<String>,
}

impl BuildModel {
  /// Look up a target by name.
  pub fn target(&self, name: &str) -> Option<&Target> {
    self.targets.get(name)
  }

  /// Whether `name` is a known target (as opposed to a plain file).
  pub fn contains(&self, name: &str) -> bool {
    self.targets.contains_key(name)
  }

  pub fn variable(&self, name: &str) -> Option<&str> {
    self.variables.get(name).map(String::as_str)
  }

  pub fn variables(&self) -> &HashMap<String, String> {
    &self.variables
  }

  /// The first target defined in the file, used when no goal is requested.
  pub fn first_target(&self) -> Option<&str> {
    self.first_target.as_deref()
  }

  /// All targets in definition order.
  ///
  /// A redefined target keeps the position of its first definition.
  pub fn targets(&self) -> impl Iterator<Item = &Target> {
    self.order.iter().filter_map(|name| self.targets.get(name))
  }

  pub fn is_empty(&self) -> bool {
    self.targets.is_empty()
  }

  pub(crate) fn set_variable(&mut self, key: String, value: String) {
    self.variables.insert(key, value);
  }

  /// Insert a target, replacing any earlier definition with the same name.
  pub(crate) fn insert_target(&mut self, target: Target) {
    if self.first_target.is_none() {
      self.first_target = Some(target.name.clone());
    }
    if !self.targets.contains_key(&target.name) {
      self.order.push(target.name.clone());
    }
    self.targets.insert(target.name.clone(), target);
  }

  pub(crate) fn target_mut(&mut self, name: &str) -> Option<&mut Target> {
    self.targets.get_mut(name)
  }
}
