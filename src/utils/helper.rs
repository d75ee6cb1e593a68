/// Share of `count` in `total` as a percentage, 0.0 when `total` is zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a signature for log lines (truncated)
pub fn format_signature(signature: &str) -> String {
    if signature.len() <= 12 || !signature.is_ascii() {
        return signature.to_string();
    }
    format!("{}...{}", &signature[..6], &signature[signature.len() - 6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn truncates_long_strings() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn formats_signature_ends() {
        let sig = "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW";
        assert_eq!(format_signature(sig), "5VERv8...SZkQUW");
        assert_eq!(format_signature("abc"), "abc");
    }
}
