//! Path string normalization.

/// Convert Windows separators to forward slashes for substring matching.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
