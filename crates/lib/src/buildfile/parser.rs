//! Single-pass line parser for buildfiles.
//!
//! Each line is classified on its own; the only context carried between lines
//! is the open target, the current group and the pending doc comments. First
//! match wins:
//!
//! 1. `[group: Name]` header
//! 2. blank line
//! 3. `# comment`
//! 4. indented command (leading space or tab)
//! 5. `key = value` assignment (contains `=` but no `:`)
//! 6. `name: deps...` target definition
//!
//! Anything else is a syntax error. The `=`/`:` heuristic means a variable
//! value can never contain `:`, and a target line containing `=` is still a
//! target.

use tracing::trace;

use crate::consts::DEFAULT_GROUP;

use super::types::{BuildModel, BuildfileError, Target};

const GROUP_PREFIX: &str = "[group:";

/// Parse buildfile text into a [`BuildModel`].
///
/// Parsing stops at the first malformed line; no partial model is returned.
pub fn parse(text: &str) -> Result<BuildModel, BuildfileError> {
  text
    .lines()
    .enumerate()
    .try_fold(ParserState::default(), |mut state, (idx, line)| {
      state.feed(idx + 1, line)?;
      Ok(state)
    })
    .map(ParserState::finish)
}

/// Parser context threaded through the line fold.
#[derive(Debug)]
struct ParserState {
  model: BuildModel,
  current_target: Option<String>,
  current_group: String,
  pending_doc: Vec<String>,
}

impl Default for ParserState {
  fn default() -> Self {
    Self {
      model: BuildModel::default(),
      current_target: None,
      current_group: DEFAULT_GROUP.to_string(),
      pending_doc: Vec::new(),
    }
  }
}

impl ParserState {
  fn feed(&mut self, line_no: usize, line: &str) -> Result<(), BuildfileError> {
    let stripped = line.trim();

    if let Some(group) = group_label(stripped) {
      trace!(line = line_no, group, "group header");
      self.current_group = group.to_string();
      self.current_target = None;
      self.pending_doc.clear();
      return Ok(());
    }

    if stripped.is_empty() {
      // Doc comments must sit directly above their target.
      if self.current_target.is_none() {
        self.pending_doc.clear();
      }
      return Ok(());
    }

    if let Some(comment) = stripped.strip_prefix('#') {
      // Comments inside a command block are dropped.
      if self.current_target.is_none() {
        self.pending_doc.push(comment.trim().to_string());
      }
      return Ok(());
    }

    if line.starts_with([' ', '\t']) {
      let target = self
        .current_target
        .as_deref()
        .and_then(|name| self.model.target_mut(name))
        .ok_or(BuildfileError::OrphanCommand { line: line_no })?;
      target.commands.push(stripped.to_string());
      self.pending_doc.clear();
      return Ok(());
    }

    if stripped.contains('=') && !stripped.contains(':') {
      if let Some((key, value)) = stripped.split_once('=') {
        trace!(line = line_no, key = key.trim(), "variable");
        self.model.set_variable(key.trim().to_string(), value.trim().to_string());
      }
      self.current_target = None;
      self.pending_doc.clear();
      return Ok(());
    }

    if let Some((name, deps)) = stripped.split_once(':') {
      let name = name.trim().to_string();
      let target = Target {
        name: name.clone(),
        dependencies: deps.split_whitespace().map(str::to_string).collect(),
        commands: Vec::new(),
        doc: self.pending_doc.join(" "),
        group: self.current_group.clone(),
      };
      trace!(line = line_no, name = %name, deps = target.dependencies.len(), "target");

      self.model.insert_target(target);
      self.current_target = Some(name);
      self.pending_doc.clear();
      return Ok(());
    }

    Err(BuildfileError::Syntax {
      line: line_no,
      reason: "Syntax error.".to_string(),
    })
  }

  fn finish(self) -> BuildModel {
    self.model
  }
}

/// Extract the label from a `[group: Label]` header, matched case-insensitively.
fn group_label(stripped: &str) -> Option<&str> {
  let prefix = stripped.get(..GROUP_PREFIX.len())?;
  if !prefix.eq_ignore_ascii_case(GROUP_PREFIX) || !stripped.ends_with(']') {
    return None;
  }
  stripped
    .get(GROUP_PREFIX.len()..stripped.len() - 1)
    .map(str::trim)
}
