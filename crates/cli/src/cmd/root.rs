//! Implementation of the `instkit check-root` command.

use anyhow::{Result, bail};

use instkit_lib::user::verify_root_user;

use crate::output::print_success;

pub fn cmd_check_root() -> Result<()> {
  if let Some(message) = verify_root_user() {
    bail!(message);
  }

  print_success("Running as root");
  Ok(())
}
