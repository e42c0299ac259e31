//! Process environment capability.
//!
//! The user, terminal and platform checks read global process state (effective
//! UID, argv, environment variables, files under `/etc`). They do so through
//! [`ProcessEnv`] so that tests can substitute a fake instead of mutating the
//! real process. [`SystemEnv`] is the implementation backed by the OS.

use std::io;
use std::path::Path;

use crate::consts::{APP_NAME, CHECK_COVERAGE_VAR};
use crate::platform::os::Os;
use crate::tty::StdStream;

/// Read-only view of the state of the current process and host.
pub trait ProcessEnv {
  /// Effective user ID, or `None` where the platform has no such concept.
  fn effective_uid(&self) -> Option<u32>;

  /// Base name of the executable as invoked (argv[0]).
  fn program_name(&self) -> String;

  /// Value of an environment variable, `None` if unset.
  fn var(&self, name: &str) -> Option<String>;

  /// Operating system, `None` if unsupported.
  fn os(&self) -> Option<Os>;

  /// Whether `path` may exist. Only a definite "not found" yields `false`.
  fn path_present(&self, path: &Path) -> bool;

  /// Read a whole file as UTF-8.
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Whether `stream` is attached to an interactive terminal.
  fn is_terminal(&self, stream: StdStream) -> bool;
}

/// [`ProcessEnv`] backed by the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
  #[cfg(unix)]
  fn effective_uid(&self) -> Option<u32> {
    Some(rustix::process::geteuid().as_raw())
  }

  #[cfg(not(unix))]
  fn effective_uid(&self) -> Option<u32> {
    None
  }

  fn program_name(&self) -> String {
    std::env::args_os()
      .next()
      .and_then(|arg0| Path::new(&arg0).file_name().map(|n| n.to_string_lossy().into_owned()))
      .unwrap_or_else(|| APP_NAME.to_string())
  }

  fn var(&self, name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
  }

  fn os(&self) -> Option<Os> {
    Os::current()
  }

  fn path_present(&self, path: &Path) -> bool {
    !matches!(crate::fs::file_exists(path), Ok(false))
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn is_terminal(&self, stream: StdStream) -> bool {
    crate::tty::probe(stream)
  }
}

/// Returns true if the environment variable `name` is set to a non-empty value
pub fn env_flag_set(name: &str) -> bool {
  env_flag_set_with(&SystemEnv, name)
}

/// Like [`env_flag_set`], reading from `env`
pub fn env_flag_set_with<E: ProcessEnv + ?Sized>(env: &E, name: &str) -> bool {
  env.var(name).is_some_and(|value| !value.is_empty())
}

/// Returns true if `CHECK_COVERAGE` is set
pub fn is_check_coverage() -> bool {
  env_flag_set(CHECK_COVERAGE_VAR)
}

#[cfg(test)]
mod tests {
  use serial_test::serial;

  use super::*;
  use crate::util::testutil::FakeEnv;

  #[test]
  #[serial]
  fn env_flag_reads_process_environment() {
    temp_env::with_var("INSTKIT_TEST_FLAG", Some("1"), || {
      assert!(env_flag_set("INSTKIT_TEST_FLAG"));
    });
  }

  #[test]
  #[serial]
  fn env_flag_empty_value_is_unset() {
    temp_env::with_var("INSTKIT_TEST_FLAG", Some(""), || {
      assert!(!env_flag_set("INSTKIT_TEST_FLAG"));
    });
    temp_env::with_var("INSTKIT_TEST_FLAG", None::<&str>, || {
      assert!(!env_flag_set("INSTKIT_TEST_FLAG"));
    });
  }

  #[test]
  #[serial]
  fn check_coverage_follows_variable() {
    temp_env::with_var(CHECK_COVERAGE_VAR, Some("yes"), || {
      assert!(is_check_coverage());
    });
    temp_env::with_var(CHECK_COVERAGE_VAR, None::<&str>, || {
      assert!(!is_check_coverage());
    });
  }

  #[test]
  fn env_flag_with_fake_env() {
    let env = FakeEnv::default().with_var("CHECK_COVERAGE", "1").with_var("EMPTY", "");
    assert!(env_flag_set_with(&env, "CHECK_COVERAGE"));
    assert!(!env_flag_set_with(&env, "EMPTY"));
    assert!(!env_flag_set_with(&env, "UNSET"));
  }

  #[test]
  fn system_env_program_name_is_base_name() {
    let name = SystemEnv.program_name();
    assert!(!name.is_empty());
    assert!(!name.contains('/'));
  }

  #[test]
  fn system_env_path_present() {
    let temp = tempfile::TempDir::new().unwrap();
    assert!(SystemEnv.path_present(temp.path()));
    assert!(!SystemEnv.path_present(&temp.path().join("absent")));
  }
}
