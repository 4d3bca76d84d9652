//! Shared utility functions

/// Shorten untrusted input before echoing it back to the caller.
///
/// Strings of at most `max_len` bytes are returned as-is. Longer strings are
/// cut at the last character boundary not past `max_len` and get `...`
/// appended.
///
/// # Examples
///
/// ```
/// use awkawk_server::util::ellipsize;
///
/// assert_eq!(ellipsize("short", 30), "short");
/// assert_eq!(ellipsize("abcdefgh", 4), "abcd...");
/// ```
pub fn ellipsize(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut tip = max_len;
    while !s.is_char_boundary(tip) {
        tip -= 1;
    }

    format!("{}...", &s[..tip])
}

/// Compare two strings without short-circuiting on the first mismatch.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .as_bytes()
            .iter()
            .zip(b.as_bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}
