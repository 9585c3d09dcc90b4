//! Small formatting helpers.

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "icon")` -> `"0 icons"`
/// - `plural_count(1, "pixel")` -> `"1 pixel"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
