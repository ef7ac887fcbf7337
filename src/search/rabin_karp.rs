//! Rabin-Karp substring search with a rolling polynomial hash

/// Polynomial hash radix (alphabet size for 8-bit text)
const RADIX: i64 = 256;

/// Hash modulus. Small enough to collide frequently at scale, which is
/// why every hash hit is confirmed by a direct comparison.
const MODULUS: i64 = 101;

/// Find every occurrence of `pattern` in `text` as zero-based start
/// offsets in ascending order.
///
/// Matching is ASCII case-insensitive. The pattern hash is compared
/// against a rolling hash of each text window; a window is only reported
/// after a direct byte comparison confirms it, so hash collisions never
/// produce false positives. An empty pattern, empty text, or a pattern
/// longer than the text yields no matches.
pub fn rabin_karp_search(text: &str, pattern: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if text.is_empty() || pattern.is_empty() {
        return positions;
    }

    let text = text.to_ascii_lowercase();
    let pattern = pattern.to_ascii_lowercase();
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());

    let n = text.len();
    let m = pattern.len();
    if m > n {
        return positions;
    }

    // RADIX^(m-1) mod MODULUS, used to strip the outgoing character when
    // the window rolls forward.
    let mut high_place: i64 = 1;
    for _ in 0..m - 1 {
        high_place = (high_place * RADIX) % MODULUS;
    }

    let mut pattern_hash: i64 = 0;
    let mut window_hash: i64 = 0;
    for i in 0..m {
        pattern_hash = (RADIX * pattern_hash + i64::from(pattern[i])) % MODULUS;
        window_hash = (RADIX * window_hash + i64::from(text[i])) % MODULUS;
    }

    for i in 0..=n - m {
        if pattern_hash == window_hash && &text[i..i + m] == pattern {
            positions.push(i);
        }

        if i < n - m {
            window_hash = (RADIX * (window_hash - i64::from(text[i]) * high_place)
                + i64::from(text[i + m]))
                % MODULUS;
            if window_hash < 0 {
                window_hash += MODULUS;
            }
        }
    }

    positions
}
