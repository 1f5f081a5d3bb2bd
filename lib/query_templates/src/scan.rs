//! Scanning of SPARQL query text for placeholder tokens and prefix
//! declarations. The scanner tracks string-literal state, so a marker
//! character inside a quoted literal is never mistaken for a placeholder.

/// Marker that introduces a positional placeholder, e.g. `$1`.
pub const PLACEHOLDER_MARKER: char = '$';

/// True if `text` contains a `$n` placeholder token outside a string literal.
pub fn contains_placeholder(text: &str) -> bool {
    let mut in_literal: Option<char> = None;
    let mut escaped = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(quote) = in_literal {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_literal = None;
            }
        } else if c == '"' || c == '\'' {
            in_literal = Some(c);
        } else if c == PLACEHOLDER_MARKER {
            if chars.peek().map_or(false, |next| next.is_ascii_digit()) {
                return true;
            }
        }
    }
    false
}

/// True if `text` contains the `PREFIX` keyword (case-insensitive, at a
/// word boundary) outside a string literal.
pub fn contains_prefix_declaration(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut in_literal: Option<u8> = None;
    let mut escaped = false;
    let mut prev: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(quote) = in_literal {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == quote {
                in_literal = None;
            }
        } else if b == b'"' || b == b'\'' {
            in_literal = Some(b);
        } else if word_start(prev)
            && i + 6 <= bytes.len()
            && bytes[i..i + 6].eq_ignore_ascii_case(b"PREFIX")
            && bytes.get(i + 6).map_or(true, |next| !is_word_byte(*next))
        {
            return true;
        }
        prev = Some(b);
        i += 1;
    }
    false
}

/// Replaces each `$n` token outside string literals with `values[n - 1]`.
/// Tokens without a matching value are left in place, so the placeholder
/// check still gates execution afterwards.
pub fn substitute_placeholders(text: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_literal: Option<char> = None;
    let mut escaped = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(quote) = in_literal {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_literal = None;
            }
            continue;
        }
        if c == '"' || c == '\'' {
            in_literal = Some(c);
            out.push(c);
            continue;
        }
        if c == PLACEHOLDER_MARKER {
            let mut digits = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_ascii_digit() {
                    digits.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if digits.is_empty() {
                out.push(c);
                continue;
            }
            match digits.parse::<usize>() {
                Ok(n) if n >= 1 && n <= values.len() => out.push_str(values[n - 1]),
                _ => {
                    out.push(c);
                    out.push_str(&digits);
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn word_start(prev: Option<u8>) -> bool {
    prev.map_or(true, |b| !is_word_byte(b))
}
