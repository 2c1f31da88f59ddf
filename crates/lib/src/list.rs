//! Target listing grouped by `[group: ...]` headers.

use serde::Serialize;

use crate::buildfile::BuildModel;

/// One documented target in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetEntry {
  pub name: String,
  pub doc: String,
}

/// Targets sharing a group label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetGroup {
  pub name: String,
  pub targets: Vec<TargetEntry>,
}

impl TargetGroup {
  /// Width of the longest target name, for aligning doc columns.
  pub fn name_width(&self) -> usize {
    self.targets.iter().map(|t| t.name.len()).max().unwrap_or(0)
  }
}

/// Group all targets by label.
///
/// Groups appear in the order their first target was defined; targets keep
/// definition order within a group. A label used by two separate headers
/// yields a single group.
pub fn list_targets(model: &BuildModel) -> Vec<TargetGroup> {
  let mut groups: Vec<TargetGroup> = Vec::new();

  for target in model.targets() {
    let entry = TargetEntry {
      name: target.name.clone(),
      doc: target.doc.clone(),
    };

    match groups.iter_mut().find(|g| g.name == target.group) {
      Some(group) => group.targets.push(entry),
      None => groups.push(TargetGroup {
        name: target.group.clone(),
        targets: vec![entry],
      }),
    }
  }

  groups
}
