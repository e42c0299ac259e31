//! Fixed values shared across the crate.

/// Application name, used as the fallback program name in messages.
pub const APP_NAME: &str = "instkit";

/// Binary whose presence marks a Clear Linux system.
pub const SWUPD_MARKER: &str = "/usr/bin/swupd";

/// os-release locations, in lookup order (see os-release(5)).
pub const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Mode applied to files written by [`crate::fs::copy_file`].
pub const COPIED_FILE_MODE: u32 = 0o644;

/// Mode used for directories when the caller has no preference.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Set to a non-empty value when running under a coverage build.
pub const CHECK_COVERAGE_VAR: &str = "CHECK_COVERAGE";
