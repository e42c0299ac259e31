//! Implementation of the `instkit expand` command.

use anyhow::Result;
use tracing::debug;

use instkit_lib::expand::expand_variables;

/// Print `input` after expansion.
///
/// Without `all` this is a single pass: variables are tried in the order given
/// and only the first one found is substituted. With `all`, each variable gets
/// its own pass, in order.
pub fn cmd_expand(input: &str, vars: &[(String, String)], all: bool) -> Result<()> {
  debug!(vars = vars.len(), all, "expanding");

  println!("{}", expand(input, vars, all));
  Ok(())
}

fn expand(input: &str, vars: &[(String, String)], all: bool) -> String {
  if all {
    vars
      .iter()
      .fold(input.to_string(), |acc, (name, value)| expand_variables([(name, value)], &acc))
  } else {
    expand_variables(vars.iter().map(|(name, value)| (name, value)), input)
  }
}
