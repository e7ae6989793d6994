pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shorten a string for table display, appending an ellipsis when cut.
/// Counts characters, not bytes, so multi-byte URLs stay intact.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars).collect();
    format!("{cut}\u{2026}")
}
