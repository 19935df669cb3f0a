//! Core parsing primitives for text extraction.

use regex::Regex;
use std::hash::Hash;

/// Collect every non-overlapping match of `re` in `content`, in input order.
///
/// Uses capture group 1 when the pattern has one, otherwise the whole match.
pub fn capture_all(re: &Regex, content: &str) -> Vec<String> {
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Deduplicate preserving first occurrence order.
pub fn dedupe<T>(items: Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
