#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Token {
    /// Any ASCII letter. Only `M`, `L`, `Q`, `Z` and `z` are understood by the parser.
    Command(char),
    Number(f64),
}

/// Split a path string into command letters and numeric literals, left to right.
///
/// Separators (whitespace, commas) and any other character that cannot start a token are
/// skipped. Numbers are an optional sign, digits, and an optional fractional part; a bare `.5`
/// is accepted. Exponents are not part of the grammar.
pub(crate) fn lex(src: &str) -> Vec<Token> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphabetic() {
            out.push(Token::Command(char::from(b)));
            i += 1;
            continue;
        }
        if let Some((value, next)) = lex_number(bytes, i) {
            out.push(Token::Number(value));
            i = next;
            continue;
        }
        i += 1;
    }

    out
}

fn lex_number(bytes: &[u8], start: usize) -> Option<(f64, usize)> {
    let mut i = start;
    if matches!(bytes.get(i), Some(b'-' | b'+')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let has_int = i > int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if has_int || j > frac_start {
            i = j;
        }
    }

    if !has_int && i == int_start {
        return None;
    }

    // "3." and ".5" are both accepted by the float parser.
    let text = std::str::from_utf8(&bytes[start..i]).ok()?;
    let value = text.parse::<f64>().ok()?;
    Some((value, i))
}

#[cfg(test)]
#[path = "../../tests/unit/path/lexer.rs"]
mod tests;
