//! Single-pass variable expansion.
//!
//! [`expand_variables`] substitutes at most one variable per call. Variables
//! are tried in the iteration order of the mapping; for each one the bare form
//! `$name` is checked before the braced form `${name}`. The first form present
//! in the input has all of its occurrences replaced and the result is returned
//! straight away.
//!
//! Matching is a plain substring test, so `foo` also matches the start of
//! `$foobar`. With a `HashMap` the iteration order is unspecified, which makes
//! the result depend on which candidate the map yields first when several are
//! present. Pass an ordered container (a slice of pairs, a `BTreeMap`) to pin
//! it down.
//!
//! # Example
//!
//! ```
//! use instkit_lib::expand::expand_variables;
//!
//! let vars = [("ROOT", "/mnt/target"), ("BOOT", "/boot")];
//! assert_eq!(expand_variables(vars, "$ROOT/etc"), "/mnt/target/etc");
//!
//! // Only the first matching variable is expanded.
//! assert_eq!(expand_variables(vars, "$ROOT$BOOT"), "/mnt/target$BOOT");
//! ```

/// Run one expansion pass over `input`.
///
/// Returns `input` unchanged when none of the variables appear in it.
#[must_use]
pub fn expand_variables<I, K, V>(vars: I, input: &str) -> String
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: AsRef<str>,
{
  for (name, value) in vars {
    let name = name.as_ref();
    for form in [format!("${name}"), format!("${{{name}}}")] {
      if input.contains(&form) {
        return input.replace(&form, value.as_ref());
      }
    }
  }

  input.to_string()
}

#[cfg(test)]
mod tests {
  use std::collections::{BTreeMap, HashMap};

  use super::*;

  #[test]
  fn bare_form_replaces_every_occurrence() {
    let vars = HashMap::from([("DISK", "/dev/sda")]);
    assert_eq!(
      expand_variables(&vars, "wipefs $DISK && parted $DISK"),
      "wipefs /dev/sda && parted /dev/sda"
    );
  }

  #[test]
  fn braced_form_is_used_when_bare_form_is_absent() {
    let vars = HashMap::from([("A", "1")]);
    assert_eq!(expand_variables(&vars, "${A} only"), "1 only");
  }

  #[test]
  fn bare_form_wins_over_braced_form() {
    let vars = HashMap::from([("A", "1")]);
    assert_eq!(expand_variables(&vars, "$A and ${A}"), "1 and ${A}");
  }

  #[test]
  fn prefix_of_longer_name_is_matched() {
    let vars = HashMap::from([("foo", "X")]);
    assert_eq!(expand_variables(&vars, "$foobar"), "Xbar");
  }

  #[test]
  fn no_match_returns_input_unchanged() {
    let vars = HashMap::from([("A", "1"), ("B", "2")]);
    assert_eq!(expand_variables(&vars, "nothing to see $C ${D}"), "nothing to see $C ${D}");
    assert_eq!(expand_variables(&vars, ""), "");
  }

  #[test]
  fn empty_mapping_is_a_no_op() {
    let vars: HashMap<String, String> = HashMap::new();
    assert_eq!(expand_variables(&vars, "$A"), "$A");
  }

  #[test]
  fn unordered_mapping_substitutes_exactly_one_variable() {
    let vars = HashMap::from([("A", "1"), ("B", "2")]);
    let out = expand_variables(&vars, "$A and $B");
    assert!(out == "1 and $B" || out == "$A and 2", "unexpected expansion: {out}");
  }

  #[test]
  fn ordered_mapping_uses_first_matching_entry() {
    let vars = [("B", "2"), ("A", "1")];
    assert_eq!(expand_variables(vars, "$A and $B"), "$A and 2");

    let vars = BTreeMap::from([("A", "1"), ("B", "2")]);
    assert_eq!(expand_variables(&vars, "$A and $B"), "1 and $B");
  }

  #[test]
  fn entries_not_present_are_skipped() {
    let vars = [("MISSING", "x"), ("HOST", "clr")];
    assert_eq!(expand_variables(vars, "hostname=${HOST}"), "hostname=clr");
  }

  #[test]
  fn repeated_calls_expand_all_variables() {
    let vars = HashMap::from([("A", "1"), ("B", "2")]);
    let once = expand_variables(&vars, "$A and $B");
    let twice = expand_variables(&vars, &once);
    assert_eq!(twice, "1 and 2");
  }

  #[test]
  fn accepts_owned_strings() {
    let vars = vec![("USER".to_string(), "root".to_string())];
    assert_eq!(expand_variables(vars, "/home/$USER"), "/home/root");
  }
}
