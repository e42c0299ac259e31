//! Linux distribution detection.
//!
//! Two independent signals are available: the `swupd` marker binary, which
//! identifies Clear Linux hosts, and the `os-release` file that every systemd
//! era distribution ships.

use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::{OS_RELEASE_PATHS, SWUPD_MARKER};
use crate::sysenv::{ProcessEnv, SystemEnv};

/// Errors that can occur in platform detection
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("no readable os-release file (tried {tried}): {source}", tried = OS_RELEASE_PATHS.join(", "))]
  OsReleaseUnavailable {
    #[source]
    source: io::Error,
  },
}

/// Returns true on a Linux host with the `swupd` binary installed.
#[must_use]
pub fn is_clear_linux() -> bool {
  is_clear_linux_with(&SystemEnv)
}

/// Like [`is_clear_linux`], reading from `env`
pub fn is_clear_linux_with<E: ProcessEnv + ?Sized>(env: &E) -> bool {
  env.os().is_some_and(|os| os.is_linux()) && env.path_present(Path::new(SWUPD_MARKER))
}

/// Identification data from an os-release file.
///
/// Keys that are absent from the file are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsRelease {
  /// `ID`, lowercased (e.g. `clear-linux-os`, `ubuntu`)
  pub id: String,
  /// `ID_LIKE`, split on whitespace
  pub id_like: Vec<String>,
  pub name: String,
  pub pretty_name: String,
  pub version_id: String,
  pub version: String,
}

impl OsRelease {
  /// Parse the contents of an os-release file.
  ///
  /// Lines are `KEY=value`; blank lines, comments and lines without `=` are
  /// skipped. One layer of matching single or double quotes is removed from
  /// values. Unknown keys are ignored.
  pub fn parse(content: &str) -> Self {
    let mut release = Self::default();

    for line in content.lines() {
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let Some((key, value)) = line.split_once('=') else {
        continue;
      };
      let value = unquote(value.trim());

      match key.trim() {
        "ID" => release.id = value.to_lowercase(),
        "ID_LIKE" => release.id_like = value.split_whitespace().map(str::to_lowercase).collect(),
        "NAME" => release.name = value.to_string(),
        "PRETTY_NAME" => release.pretty_name = value.to_string(),
        "VERSION_ID" => release.version_id = value.to_string(),
        "VERSION" => release.version = value.to_string(),
        _ => {}
      }
    }

    release
  }

  /// Load os-release for the running host
  pub fn load() -> Result<Self, PlatformError> {
    Self::load_with(&SystemEnv)
  }

  /// Load os-release through `env`, trying each well-known location in turn.
  pub fn load_with<E: ProcessEnv + ?Sized>(env: &E) -> Result<Self, PlatformError> {
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "os-release not found");

    for path in OS_RELEASE_PATHS {
      match env.read_to_string(Path::new(path)) {
        Ok(content) => {
          debug!(path, "loaded os-release");
          return Ok(Self::parse(&content));
        }
        Err(e) => {
          debug!(path, error = %e, "os-release not readable");
          last_err = e;
        }
      }
    }

    Err(PlatformError::OsReleaseUnavailable { source: last_err })
  }

  /// Returns true if this is distribution `id` or derives from it.
  pub fn is_like(&self, id: &str) -> bool {
    self.id == id || self.id_like.iter().any(|like| like == id)
  }

  /// Human readable name, falling back from `PRETTY_NAME` to `NAME` to `ID`.
  pub fn display_name(&self) -> &str {
    [&self.pretty_name, &self.name, &self.id]
      .into_iter()
      .find(|s| !s.is_empty())
      .map_or("unknown", String::as_str)
  }
}

fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
      return &value[1..value.len() - 1];
    }
  }
  value
}
