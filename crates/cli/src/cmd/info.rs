//! Implementation of the `instkit info` command.

use anyhow::Result;
use serde::Serialize;

use instkit_lib::platform::{OsRelease, is_clear_linux, platform_triple};
use instkit_lib::sysenv::is_check_coverage;
use instkit_lib::tty::is_stdout_tty;
use instkit_lib::user::is_root;

use crate::output::{OutputFormat, format_bool, print_json, print_stat, print_warning, symbols};

#[derive(Debug, Serialize)]
struct InfoReport {
  platform: Option<String>,
  os_release: Option<OsRelease>,
  clear_linux: bool,
  root: bool,
  stdout_tty: bool,
  check_coverage: bool,
}

impl InfoReport {
  fn gather() -> Self {
    let os_release = match OsRelease::load() {
      Ok(release) => Some(release),
      Err(e) => {
        tracing::debug!(error = %e, "os-release unavailable");
        None
      }
    };

    Self {
      platform: platform_triple(),
      os_release,
      clear_linux: is_clear_linux(),
      root: is_root(),
      stdout_tty: is_stdout_tty(),
      check_coverage: is_check_coverage(),
    }
  }
}

pub fn cmd_info(output: OutputFormat) -> Result<()> {
  let report = InfoReport::gather();

  if output.is_json() {
    return print_json(&report);
  }

  println!("{} System:", symbols::INFO);
  match &report.platform {
    Some(triple) => print_stat("Platform", triple),
    None => print_warning("Could not detect platform."),
  }
  match &report.os_release {
    Some(release) => {
      print_stat("Distribution", release.display_name());
      if !release.version_id.is_empty() {
        print_stat("Version", &release.version_id);
      }
    }
    None => print_stat("Distribution", "unknown"),
  }
  print_stat("Clear Linux", format_bool(report.clear_linux));
  print_stat("Root", format_bool(report.root));
  print_stat("Stdout TTY", format_bool(report.stdout_tty));
  print_stat("Coverage build", format_bool(report.check_coverage));

  Ok(())
}
