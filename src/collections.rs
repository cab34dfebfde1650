//! Small slice membership helpers.

/// Test whether a slice of strings contains the given value.
///
/// Linear scan, true on the first match; no ordering requirement.
pub fn string_slice_contains<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    haystack.iter().any(|item| item.as_ref() == needle)
}

/// Test whether a slice of integers contains the given value.
pub fn int_slice_contains(haystack: &[i64], needle: i64) -> bool {
    haystack.iter().any(|item| *item == needle)
}
