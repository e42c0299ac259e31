//! Test utilities for instkit-lib.
//!
//! [`FakeEnv`] stands in for the running process so that root, terminal and
//! distribution checks can be exercised without touching real process state.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::platform::os::Os;
use crate::sysenv::ProcessEnv;
use crate::tty::StdStream;

/// In-memory [`ProcessEnv`].
///
/// Defaults to no UID, program `instkit-test`, Linux, no files, no terminals.
#[derive(Debug, Clone)]
pub struct FakeEnv {
  pub uid: Option<u32>,
  pub program: String,
  pub vars: HashMap<String, String>,
  pub os: Option<Os>,
  pub files: HashMap<PathBuf, String>,
  pub terminals: HashSet<StdStream>,
}

impl Default for FakeEnv {
  fn default() -> Self {
    Self {
      uid: None,
      program: "instkit-test".to_string(),
      vars: HashMap::new(),
      os: Some(Os::Linux),
      files: HashMap::new(),
      terminals: HashSet::new(),
    }
  }
}

impl FakeEnv {
  pub fn with_uid(mut self, uid: u32) -> Self {
    self.uid = Some(uid);
    self
  }

  pub fn with_program(mut self, program: &str) -> Self {
    self.program = program.to_string();
    self
  }

  pub fn with_var(mut self, name: &str, value: &str) -> Self {
    self.vars.insert(name.to_string(), value.to_string());
    self
  }

  pub fn with_os(mut self, os: Option<Os>) -> Self {
    self.os = os;
    self
  }

  pub fn with_file(mut self, path: &str, content: &str) -> Self {
    self.files.insert(PathBuf::from(path), content.to_string());
    self
  }

  pub fn with_terminal(mut self, stream: StdStream) -> Self {
    self.terminals.insert(stream);
    self
  }
}

impl ProcessEnv for FakeEnv {
  fn effective_uid(&self) -> Option<u32> {
    self.uid
  }

  fn program_name(&self) -> String {
    self.program.clone()
  }

  fn var(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned()
  }

  fn os(&self) -> Option<Os> {
    self.os
  }

  fn path_present(&self, path: &Path) -> bool {
    self.files.contains_key(path)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self
      .files
      .get(path)
      .cloned()
      .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())))
  }

  fn is_terminal(&self, stream: StdStream) -> bool {
    self.terminals.contains(&stream)
  }
}
