//! Delimiter matching over declaration text that steps over comments and string literals.

/// Byte index of the `)` closing the `(` at `open`, or `None` when unbalanced.
pub fn matching_paren(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = line_end(bytes, i);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = block_end(bytes, i)?;
                continue;
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i = string_end(bytes, i, quote)?;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Index of the first byte at or after `from` that is neither whitespace nor part of a comment.
pub fn skip_trivia(source: &str, from: usize) -> usize {
    let bytes = source.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b if b.is_ascii_whitespace() => i += 1,
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = line_end(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => match block_end(bytes, i) {
                Some(end) => i = end,
                None => return bytes.len(),
            },
            _ => break,
        }
    }
    i
}

/// Copy of `text` with `//` and `/* */` comments removed. An unterminated block comment
/// swallows the rest of the text.
pub fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'/' && matches!(bytes.get(i + 1), Some(b'/') | Some(b'*')) {
            out.push_str(&text[start..i]);
            i = if bytes[i + 1] == b'/' {
                line_end(bytes, i)
            } else {
                block_end(bytes, i).unwrap_or(bytes.len())
            };
            start = i;
            continue;
        }
        i += 1;
    }
    out.push_str(&text[start..]);
    out
}

fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| from + offset)
}

// `from` points at the `/` of `/*`; returns the index just past `*/`.
fn block_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|offset| from + 2 + offset + 2)
}

// `from` points at the opening quote; returns the index just past the closing one.
fn string_end(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut i = from + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
