//! Implementation of `makeover --list`.

use anyhow::Result;

use makeover_lib::list::list_targets;

use crate::output::{self, OutputFormat};

use super::{Settings, load_model};

pub fn cmd_list(settings: &Settings, format: OutputFormat) -> Result<()> {
  let model = load_model(settings)?;
  let groups = list_targets(&model);

  if format.is_json() {
    return output::print_json(&groups);
  }

  println!("Available targets:");
  for group in &groups {
    println!();
    for line in output::format_group(group) {
      println!("{}", line);
    }
  }

  Ok(())
}
