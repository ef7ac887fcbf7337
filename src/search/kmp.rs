//! Knuth-Morris-Pratt substring search

/// Longest-proper-prefix-suffix (failure) table for a pattern.
///
/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it; a mismatch at position
/// `i + 1` restarts the matcher there instead of rescanning the text.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0usize; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}

/// Find every occurrence of `pattern` in `text`, including overlapping
/// ones, as zero-based start offsets in ascending order.
///
/// Matching is ASCII case-insensitive. O(|pattern|) table build plus a
/// single O(|text|) scan. An empty pattern or empty text yields no
/// matches.
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if text.is_empty() || pattern.is_empty() {
        return positions;
    }

    let text = text.to_ascii_lowercase();
    let pattern = pattern.to_ascii_lowercase();
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());

    let table = failure_table(pattern);
    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                positions.push(i - j);
                j = table[j - 1];
            }
        } else if j != 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_table() {
        assert_eq!(failure_table(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(failure_table(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(failure_table(b"abcd"), vec![0, 0, 0, 0]);
        assert_eq!(failure_table(b"aabaaac"), vec![0, 1, 0, 1, 2, 2, 0]);
    }

    #[test]
    fn test_single_match() {
        assert_eq!(kmp_search("hello world", "world"), vec![6]);
    }

    #[test]
    fn test_all_overlapping_matches() {
        assert_eq!(kmp_search("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(kmp_search("ababab", "abab"), vec![0, 2]);
    }

    #[test]
    fn test_no_match() {
        assert!(kmp_search("hello", "xyz").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(kmp_search("New York", "new"), vec![0]);
        assert_eq!(kmp_search("reading", "READ"), vec![0]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(kmp_search("", "abc").is_empty());
        assert!(kmp_search("abc", "").is_empty());
        assert!(kmp_search("", "").is_empty());
        assert!(kmp_search("ab", "abc").is_empty());
    }

    #[test]
    fn test_pattern_equals_text() {
        assert_eq!(kmp_search("abc", "abc"), vec![0]);
    }
}
