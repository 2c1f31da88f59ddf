//! Test utilities for makeover-lib.
//!
//! Helpers for creating files with controlled modification times, so
//! staleness tests don't depend on filesystem timestamp resolution.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Fixed reference point for test timestamps.
pub fn base_time() -> SystemTime {
  SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

/// Create (or truncate) `path` and set its mtime to `base_time() + offset_secs`.
pub fn touch_at(path: &Path, offset_secs: u64) {
  let file = File::create(path).unwrap();
  file.set_modified(base_time() + Duration::from_secs(offset_secs)).unwrap();
}

/// Read the mtime of `path`.
pub fn mtime(path: &Path) -> SystemTime {
  std::fs::metadata(path).unwrap().modified().unwrap()
}
