//! Root user checks.

use tracing::debug;

use crate::sysenv::{ProcessEnv, SystemEnv};

/// Returns true if the process runs with effective UID 0.
///
/// Platforms without UIDs always report `false`.
#[must_use]
pub fn is_root() -> bool {
  is_root_with(&SystemEnv)
}

/// Like [`is_root`], reading from `env`
pub fn is_root_with<E: ProcessEnv + ?Sized>(env: &E) -> bool {
  env.effective_uid() == Some(0)
}

/// Check that the installer runs as root.
///
/// Returns `None` when it does, otherwise a message for the user naming the
/// program and the current UID (`UNKNOWN` if it cannot be determined).
///
/// ```
/// if let Some(message) = instkit_lib::user::verify_root_user() {
///   assert!(message.contains("MUST run as 'root' user"));
/// }
/// ```
#[must_use]
pub fn verify_root_user() -> Option<String> {
  verify_root_user_with(&SystemEnv)
}

/// Like [`verify_root_user`], reading from `env`
pub fn verify_root_user_with<E: ProcessEnv + ?Sized>(env: &E) -> Option<String> {
  let uid = env.effective_uid();
  debug!(uid = ?uid, "verifying root user");

  match uid {
    Some(0) => None,
    Some(uid) => Some(not_root_message(&env.program_name(), &uid.to_string())),
    None => Some(not_root_message(&env.program_name(), "UNKNOWN")),
  }
}

fn not_root_message(program: &str, user: &str) -> String {
  format!("{} MUST run as 'root' user to install! (user={})", program, user)
}
