//! Implementation of the filesystem commands: `mkdir`, `copy` and `exists`.

use std::path::Path;

use anyhow::{Context, Result};

use instkit_lib::fs::{copy_file, file_exists, mkdir_all};

use crate::output::{format_mode, print_success};

pub fn cmd_mkdir(path: &Path, mode: u32) -> Result<()> {
  mkdir_all(path, mode)?;

  let shown = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
  print_success(&format!("Directory ready: {} (mode {})", shown.display(), format_mode(mode)));
  Ok(())
}

pub fn cmd_copy(src: &Path, dest: &Path) -> Result<()> {
  copy_file(src, dest).with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;

  print_success(&format!("Copied {} -> {}", src.display(), dest.display()));
  Ok(())
}

/// Print `true` or `false`. An indeterminate answer is an error.
pub fn cmd_exists(path: &Path) -> Result<()> {
  let exists = file_exists(path).context("Could not determine whether the path exists")?;
  println!("{}", exists);
  Ok(())
}
