//! Timestamp-based staleness checks.

use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use crate::buildfile::{BuildModel, Target};

/// Decide whether `target` must run its commands.
///
/// A target is stale when:
/// - its output file (named after the target) doesn't exist under `root`
/// - any dependency file is strictly newer than the output
/// - a dependency is neither an existing file nor a known target, so its
///   freshness can't be verified
///
/// A dependency that is a known target but left no file behind is not by
/// itself a reason to rebuild; the recursive build already handled it.
pub fn needs_rebuild(root: &Path, target: &Target, model: &BuildModel) -> bool {
  let Some(target_mtime) = modified(&root.join(&target.name)) else {
    debug!(name = %target.name, "output missing, rebuild needed");
    return true;
  };

  for dep in &target.dependencies {
    match modified(&root.join(dep)) {
      Some(dep_mtime) if dep_mtime > target_mtime => {
        debug!(name = %target.name, dep = %dep, "dependency is newer, rebuild needed");
        return true;
      }
      Some(_) => {}
      None if model.contains(dep) => {}
      None => {
        debug!(name = %target.name, dep = %dep, "dependency missing, rebuild needed");
        return true;
      }
    }
  }

  false
}

fn modified(path: &Path) -> Option<SystemTime> {
  std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
