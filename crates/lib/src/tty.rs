//! Interactive terminal detection.

use std::fmt;

use crate::sysenv::{ProcessEnv, SystemEnv};

/// One of the three standard streams of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdStream {
  Stdin,
  Stdout,
  Stderr,
}

impl StdStream {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Stdin => "stdin",
      Self::Stdout => "stdout",
      Self::Stderr => "stderr",
    }
  }
}

impl fmt::Display for StdStream {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Query the terminal attributes of `stream`.
///
/// A stream is interactive when `tcgetattr` succeeds on it. Pipes, regular
/// files and `/dev/null` fail the query with `ENOTTY`.
#[cfg(unix)]
pub(crate) fn probe(stream: StdStream) -> bool {
  use rustix::termios::tcgetattr;

  match stream {
    StdStream::Stdin => tcgetattr(std::io::stdin()).is_ok(),
    StdStream::Stdout => tcgetattr(std::io::stdout()).is_ok(),
    StdStream::Stderr => tcgetattr(std::io::stderr()).is_ok(),
  }
}

#[cfg(not(unix))]
pub(crate) fn probe(stream: StdStream) -> bool {
  use std::io::IsTerminal;

  match stream {
    StdStream::Stdin => std::io::stdin().is_terminal(),
    StdStream::Stdout => std::io::stdout().is_terminal(),
    StdStream::Stderr => std::io::stderr().is_terminal(),
  }
}

/// Returns true if standard output is attached to a terminal
pub fn is_stdout_tty() -> bool {
  is_stdout_tty_with(&SystemEnv)
}

/// Like [`is_stdout_tty`], probing through `env`
pub fn is_stdout_tty_with<E: ProcessEnv + ?Sized>(env: &E) -> bool {
  env.is_terminal(StdStream::Stdout)
}
