/// Returns the absolute index of the first `target` byte in `buf` at or after
/// `start`, or `None` if there is no such byte.
///
/// A `start` at or beyond the end of `buf` is never a match.
pub fn find(target: u8, start: usize, buf: &[u8]) -> Option<usize> {
    buf.get(start..)?
        .iter()
        .position(|b| *b == target)
        .map(|n| start + n)
}

/// If `line` is of the form `<name> <value>`, returns `value`.
pub(crate) fn header<'a>(line: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    if line.contains(&b' ') {
        let (maybe_name, value) = split_once(line, &b' ');
        if maybe_name == name {
            Some(value)
        } else {
            None
        }
    } else {
        None
    }
}

pub(crate) fn split_once<'a>(s: &'a [u8], c: &u8) -> (&'a [u8], &'a [u8]) {
    match s.iter().position(|b| b == c) {
        Some(n) => (&s[0..n], &s[n + 1..]),
        None => (s, &[]),
    }
}

/// Strips ASCII whitespace from both ends of `s`.
pub(crate) fn trim(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or_else(|| s.len());

    let end = s
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |n| n + 1);

    &s[start..end]
}
