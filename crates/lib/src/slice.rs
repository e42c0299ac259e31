//! Slice membership tests.

/// Returns true if `values` contains `needle`.
///
/// Accepts any string-like element type, so both `&[String]` and `&[&str]`
/// work.
pub fn string_slice_contains<S: AsRef<str>>(values: &[S], needle: &str) -> bool {
  values.iter().any(|value| value.as_ref() == needle)
}

/// Returns true if `values` contains `needle`
pub fn int_slice_contains(values: &[i64], needle: i64) -> bool {
  values.contains(&needle)
}
