mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use instkit_lib::consts::DEFAULT_DIR_MODE;

use crate::output::{OutputFormat, print_error};

/// instkit - OS helpers for installer scripts
#[derive(Parser)]
#[command(name = "instkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run one variable expansion pass over INPUT
  ///
  /// Variables are tried in the order given. Only the first one found in
  /// INPUT is substituted unless --all is passed.
  Expand {
    /// Text containing $NAME or ${NAME} references
    input: String,

    /// Variable definition, may be repeated
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_var)]
    set: Vec<(String, String)>,

    /// Run one pass per variable instead of a single pass
    #[arg(long)]
    all: bool,
  },

  /// Create a directory and any missing parents
  Mkdir {
    path: PathBuf,

    /// Octal permission bits for created directories [default: 755]
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<u32>,
  },

  /// Copy a file into an existing directory
  Copy { src: PathBuf, dest: PathBuf },

  /// Print whether a path exists
  Exists { path: PathBuf },

  /// Fail unless running as root
  CheckRoot,

  /// Show platform and distribution details
  Info {
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Expand { input, set, all } => cmd::cmd_expand(&input, &set, all),
    Commands::Mkdir { path, mode } => cmd::cmd_mkdir(&path, mode.unwrap_or(DEFAULT_DIR_MODE)),
    Commands::Copy { src, dest } => cmd::cmd_copy(&src, &dest),
    Commands::Exists { path } => cmd::cmd_exists(&path),
    Commands::CheckRoot => cmd::cmd_check_root(),
    Commands::Info { output } => cmd::cmd_info(output),
  };

  if let Err(e) = result {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn parse_var(s: &str) -> Result<(String, String), String> {
  match s.split_once('=') {
    Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
    _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
  }
}

fn parse_mode(s: &str) -> Result<u32, String> {
  let mode = u32::from_str_radix(s.trim_start_matches("0o"), 8).map_err(|_| format!("invalid octal mode '{}'", s))?;
  if mode > 0o7777 {
    return Err(format!("mode '{}' out of range", s));
  }
  Ok(mode)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_var_splits_on_first_equals() {
    assert_eq!(parse_var("A=1").unwrap(), ("A".to_string(), "1".to_string()));
    assert_eq!(parse_var("URL=a=b").unwrap(), ("URL".to_string(), "a=b".to_string()));
    assert_eq!(parse_var("EMPTY=").unwrap(), ("EMPTY".to_string(), String::new()));
  }

  #[test]
  fn parse_var_rejects_missing_name() {
    assert!(parse_var("NOVALUE").is_err());
    assert!(parse_var("=1").is_err());
  }

  #[test]
  fn parse_mode_accepts_octal() {
    assert_eq!(parse_mode("755").unwrap(), 0o755);
    assert_eq!(parse_mode("0700").unwrap(), 0o700);
    assert_eq!(parse_mode("0o644").unwrap(), 0o644);
  }

  #[test]
  fn parse_mode_rejects_garbage() {
    assert!(parse_mode("9z").is_err());
    assert!(parse_mode("").is_err());
    assert!(parse_mode("77777").is_err());
  }
}
