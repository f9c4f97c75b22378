//! Field cleanup shared by every destination format.

/// Drop the sub-second part of a timestamp, truncating toward zero
///
/// The result is always a whole number. It stays an `f64` so timestamps past
/// the `i64` range keep their magnitude instead of saturating.
pub fn truncate_timestamp(timestamp: f64) -> f64 {
    // + 0.0 folds -0.0 (from e.g. -0.5) into 0.0
    timestamp.trunc() + 0.0
}

/// Render a timestamp as whole seconds, without exponent or decimal point
pub fn format_timestamp(timestamp: f64) -> String {
    format!("{:.0}", truncate_timestamp(timestamp))
}

/// Strip a URL fragment: everything from the first `#` onward
pub fn clean_url(url: &str) -> &str {
    match url.find('#') {
        Some(pos) => &url[..pos],
        None => url,
    }
}
