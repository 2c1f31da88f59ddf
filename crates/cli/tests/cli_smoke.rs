//! CLI smoke tests for makeover.
//!
//! These tests run the binary against buildfiles in temp directories and
//! check exit codes, console output and the files the commands produce.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the makeover binary, run inside `dir`.
fn makeover_in(dir: &TempDir) -> Command {
  let mut cmd = cargo_bin_cmd!("makeover");
  cmd
    .arg("-C")
    .arg(dir.path())
    .env_remove("MAKEOVER_FILE")
    .env_remove("MAKEOVER_SHELL")
    .env_remove("RUST_LOG");
  cmd
}

/// Create a temp directory with a buildfile.
fn temp_buildfile(content: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("buildfile"), content).unwrap();
  temp
}

/// Two chained targets; `all` is the default goal.
const CHAIN: &str = r#"
OUT=result.txt

# Build everything
all: stage
	echo all-done

[group: Stages]
# Write the first stage
stage:
	echo built > $OUT
"#;

/// Writes one file per target so runs can be observed from the filesystem.
const OUTPUTS: &str = "first:\n\techo first > first\nsecond:\n\techo second > second\n";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  cargo_bin_cmd!("makeover")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  cargo_bin_cmd!("makeover")
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("makeover"));
}

// =============================================================================
// build
// =============================================================================

#[test]
fn builds_first_target_by_default() {
  let temp = temp_buildfile(CHAIN);

  makeover_in(&temp)
    .assert()
    .success()
    .stdout(predicate::str::contains("Building target: all"))
    .stdout(predicate::str::contains("Ran 2 command(s)"));

  assert!(temp.path().join("result.txt").exists());
}

#[test]
fn up_to_date_target_runs_nothing() {
  let temp = temp_buildfile(OUTPUTS);

  makeover_in(&temp).arg("first").assert().success();

  makeover_in(&temp)
    .arg("first")
    .assert()
    .success()
    .stdout(predicate::str::contains("Target 'first' is up to date."))
    .stdout(predicate::str::contains("Ran 0 command(s)"));
}

#[test]
fn builds_requested_targets_in_order() {
  let temp = temp_buildfile(OUTPUTS);

  makeover_in(&temp).arg("second").arg("first").assert().success();

  assert!(temp.path().join("first").exists());
  assert!(temp.path().join("second").exists());
}

#[test]
fn failure_stops_remaining_goals() {
  let temp = temp_buildfile("broken:\n\texit 1\nfirst:\n\techo first > first\n");

  makeover_in(&temp)
    .arg("broken")
    .arg("first")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Error: Command failed: exit 1"))
    .stderr(predicate::str::contains("Error building").not());

  assert!(!temp.path().join("first").exists());
}

#[test]
fn missing_dependency_fails() {
  let temp = temp_buildfile("app: main.c\n\techo app > app\n");

  makeover_in(&temp)
    .assert()
    .failure()
    .stderr(predicate::str::contains("No rule to make target 'main.c'"));
}

#[test]
fn cycle_fails_without_running_commands() {
  let temp = temp_buildfile("a: b\n\techo a > a\nb: a\n\techo b > b\n");

  makeover_in(&temp)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Circular dependency detected involving a"));

  assert!(!temp.path().join("a").exists());
  assert!(!temp.path().join("b").exists());
}

#[test]
fn dry_run_prints_without_running() {
  let temp = temp_buildfile(OUTPUTS);

  makeover_in(&temp)
    .arg("--dry-run")
    .arg("first")
    .assert()
    .success()
    .stdout(predicate::str::contains("echo first > first"))
    .stdout(predicate::str::contains("Would run 1 command(s)"));

  assert!(!temp.path().join("first").exists());
}

#[test]
fn empty_buildfile_has_nothing_to_build() {
  let temp = temp_buildfile("# only a comment\nX=1\n");

  makeover_in(&temp)
    .assert()
    .success()
    .stdout(predicate::str::contains("No targets found in buildfile."));
}

// =============================================================================
// buildfile selection & errors
// =============================================================================

#[test]
fn syntax_error_aborts_before_building() {
  let temp = temp_buildfile("first:\n\techo first > first\nfoo\n");

  makeover_in(&temp)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Error parsing buildfile"))
    .stderr(predicate::str::contains("Line 3"));

  assert!(!temp.path().join("first").exists());
}

#[test]
fn orphan_command_is_reported() {
  let temp = temp_buildfile("\techo nowhere\n");

  makeover_in(&temp)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Command found outside of target block"));
}

#[test]
fn missing_buildfile_fails() {
  let temp = TempDir::new().unwrap();

  makeover_in(&temp)
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));
}

#[test]
fn file_flag_selects_buildfile() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("custom.build"), OUTPUTS).unwrap();

  makeover_in(&temp).arg("-f").arg("custom.build").assert().success();

  assert!(temp.path().join("first").exists());
}

#[test]
fn env_var_selects_buildfile() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("ci.build"), OUTPUTS).unwrap();

  makeover_in(&temp)
    .env("MAKEOVER_FILE", "ci.build")
    .arg("second")
    .assert()
    .success();

  assert!(temp.path().join("second").exists());
}

// =============================================================================
// list
// =============================================================================

#[test]
fn list_shows_groups_and_docs() {
  let temp = temp_buildfile(CHAIN);

  makeover_in(&temp)
    .arg("--list")
    .assert()
    .success()
    .stdout(predicate::str::contains("Available targets:"))
    .stdout(predicate::str::contains("General"))
    .stdout(predicate::str::contains("# Build everything"))
    .stdout(predicate::str::contains("Stages"))
    .stdout(predicate::str::contains("# Write the first stage"));

  assert!(!temp.path().join("result.txt").exists());
}

#[test]
fn list_without_targets_prints_only_header() {
  let temp = temp_buildfile("X=1\n");

  makeover_in(&temp)
    .arg("--list")
    .assert()
    .success()
    .stdout(predicate::str::diff("Available targets:\n"));
}

#[test]
fn list_json_output() {
  let temp = temp_buildfile(CHAIN);

  let output = makeover_in(&temp)
    .arg("--list")
    .arg("--format")
    .arg("json")
    .output()
    .unwrap();

  assert!(output.status.success());
  let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(groups[0]["name"], "General");
  assert_eq!(groups[0]["targets"][0]["name"], "all");
  assert_eq!(groups[1]["name"], "Stages");
  assert_eq!(groups[1]["targets"][0]["doc"], "Write the first stage");
}
