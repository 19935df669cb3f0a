//! Extraction of absolute `.cpp` paths from raw log text.
//!
//! Linker errors look like
//! `/Users/me/.../micro/micro_time.cpp:43: multiple definition of ...`.
//! The match stops at the first `.cpp`, so `:line:col` suffixes and any
//! `.cpp.disabled` tail are left out.

use regex::Regex;
use std::sync::LazyLock;

use crate::parser;

static CPP_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // A `/`, then the shortest run of non-whitespace, non-colon characters
    // up to a literal `.cpp`.
    Regex::new(r"/[^\s:]+?\.cpp").unwrap()
});

/// Every `.cpp` path in `text`, in order of appearance. Duplicates are kept.
pub fn find_cpp_paths(text: &str) -> Vec<String> {
    parser::capture_all(&CPP_PATH_PATTERN, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MICRO_TIME: &str = "/a/varoa_mite_detection_inferencing/src/edge-impulse-sdk/tensorflow/lite/micro/micro_time.cpp";

    #[test]
    fn strips_line_and_column_suffix() {
        let log = format!("{}:43: multiple definition of `ticks_per_second()'", MICRO_TIME);
        assert_eq!(find_cpp_paths(&log), vec![MICRO_TIME.to_string()]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let log = "\
/x/one.cpp:1:2: first defined here
/x/two.cpp:3: multiple definition
/x/one.cpp:9: multiple definition
";
        assert_eq!(
            find_cpp_paths(log),
            vec!["/x/one.cpp", "/x/two.cpp", "/x/one.cpp"]
        );
    }

    #[test]
    fn stops_at_first_cpp_occurrence() {
        assert_eq!(find_cpp_paths("/x/a.cpp.disabled"), vec!["/x/a.cpp"]);
        assert_eq!(find_cpp_paths("/x/a.cppx/b.cpp"), vec!["/x/a.cpp", "/b.cpp"]);
    }

    #[test]
    fn ignores_paths_without_cpp() {
        assert!(find_cpp_paths("/usr/include/stdio.h:10: note").is_empty());
        assert!(find_cpp_paths("relative.cpp:3: error").is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(find_cpp_paths("").is_empty());
    }

    #[test]
    fn matches_never_contain_whitespace_or_colon() {
        let log = "ld: /tmp/obj/a b.cpp /tmp/c:d.cpp\t/tmp/e.cpp:1:\r\n/tmp/f\r.cpp";
        let paths = find_cpp_paths(log);
        assert!(!paths.is_empty());
        for path in &paths {
            assert!(path.ends_with(".cpp"), "{}", path);
            assert!(!path.contains(':'), "{}", path);
            assert!(!path.chars().any(char::is_whitespace), "{}", path);
        }
    }

    #[test]
    fn starts_at_leftmost_slash() {
        let log = "In file included from /home/u/lib/src/x.cpp:1:";
        assert_eq!(find_cpp_paths(log), vec!["/home/u/lib/src/x.cpp"]);
    }
}
