// arg_utils.rs: Low-level argument helpers shared by alias detection and
// the option resolver.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns `true` if `exe_path` matches `name`, excluding any file extension.
///
/// The executable name must start with `name` and the character immediately
/// after must be end-of-string or `'.'`.
pub fn exe_name_match(exe_path: &str, name: &str) -> bool {
    if let Some(rest) = exe_path.strip_prefix(name) {
        rest.is_empty() || rest.starts_with('.')
    } else {
        false
    }
}

/// Parses an unsigned 32-bit decimal integer from the start of `s`.
///
/// Returns `None` if `s` does not start with a digit, or
/// `Some((value, remainder))` where `remainder` begins at the first
/// non-digit character.
///
/// Digits are accumulated as `value = value * 10 + digit` with wrapping
/// arithmetic: values above `u32::MAX` wrap modulo 2^32 instead of
/// panicking or saturating. `"4294967296"` therefore yields `0`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.first().map_or(true, |b| !b.is_ascii_digit()) {
        return None;
    }

    let mut result: u32 = 0;
    let mut i = 0usize;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        result = result.wrapping_mul(10).wrapping_add((bytes[i] - b'0') as u32);
        i += 1;
    }

    Some((result, &s[i..]))
}
