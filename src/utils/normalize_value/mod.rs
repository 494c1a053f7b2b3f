use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE_RUN_RE: Regex = Regex::new(r"[\s\x{FEFF}]+").unwrap();
}

/// Replaces every maximal run of whitespace in a stringified modifier value with a single `-`.
///
/// The U+FEFF byte order mark counts as whitespace too.
pub fn normalize_value(value: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(value, "-").to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_value;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize_value("dark mode"), "dark-mode");
        assert_eq!(normalize_value("very   dark \t\n mode"), "very-dark-mode");
        assert_eq!(normalize_value(" padded "), "-padded-");
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(normalize_value("a\u{feff}b"), "a-b");
        assert_eq!(normalize_value("a \u{feff}\u{a0}b"), "a-b");
    }

    #[test]
    fn test_leaves_plain_values_alone() {
        assert_eq!(normalize_value("small"), "small");
        assert_eq!(normalize_value("1.5"), "1.5");
        assert_eq!(normalize_value(""), "");
    }
}
