//! Buildfile parsing and the in-memory target graph.
//!
//! A buildfile is a line-oriented description of variables and targets:
//!
//! ```text
//! CC=gcc
//!
//! [group: Compile]
//! # Link the final binary
//! app: main.o util.o
//!     $CC -o app main.o util.o
//! ```
//!
//! Parsing produces a [`BuildModel`], which is read-only from then on.

mod parser;
mod types;

use std::path::Path;

use tracing::debug;

pub use parser::parse;
pub use types::{BuildModel, BuildfileError, Target};

/// Read and parse the buildfile at `path`.
pub fn load(path: &Path) -> Result<BuildModel, BuildfileError> {
  if !path.exists() {
    return Err(BuildfileError::NotFound(path.to_path_buf()));
  }

  let text = std::fs::read_to_string(path).map_err(|source| BuildfileError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let model = parse(&text)?;
  debug!(
    path = %path.display(),
    targets = model.targets().count(),
    variables = model.variables().len(),
    "loaded buildfile"
  );

  Ok(model)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn load_missing_buildfile_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("buildfile");

    let err = load(&path).unwrap_err();

    assert!(matches!(err, BuildfileError::NotFound(ref p) if p == &path));
    assert!(err.to_string().contains("not found"));
  }

  #[test]
  fn load_reads_and_parses() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("buildfile");
    std::fs::write(&path, "all: out\nout:\n\ttouch out\n").unwrap();

    let model = load(&path).unwrap();

    assert_eq!(model.first_target(), Some("all"));
    assert_eq!(model.target("out").unwrap().commands, vec!["touch out"]);
  }

  #[test]
  fn load_propagates_syntax_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("buildfile");
    std::fs::write(&path, "all:\nfoo\n").unwrap();

    let err = load(&path).unwrap_err();

    assert!(matches!(err, BuildfileError::Syntax { line: 2, .. }));
  }
}
