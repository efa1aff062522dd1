//! Line-oriented key/value text format
//!
//! A compatible subset of the Java properties convention: one pair per
//! logical line, `=` or `:` (or bare whitespace) separating key from
//! value, `#`/`!` comment lines, backslash escapes, and trailing-backslash
//! line continuation.

/// Parse file content into key/value pairs in file order.
///
/// Malformed lines never fail: a line with no separator becomes a key with
/// an empty value, matching the reference behavior.
pub fn parse(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        // Odd number of trailing backslashes continues the logical line.
        let mut logical = trimmed.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        entries.push(split_pair(&logical));
    }

    entries
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Split one logical line into an unescaped (key, value) pair.
fn split_pair(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();

    // Key ends at the first unescaped separator.
    let mut key_end = chars.len();
    let mut escaped = false;
    for (i, &c) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = unescape(&chars[..key_end]);
    if key_end == chars.len() {
        return (key, String::new());
    }

    // Skip whitespace, at most one explicit separator, then whitespace.
    let mut pos = key_end;
    if chars[pos] == '=' || chars[pos] == ':' {
        pos += 1;
    } else {
        while pos < chars.len() && (chars[pos] == ' ' || chars[pos] == '\t') {
            pos += 1;
        }
        if pos < chars.len() && (chars[pos] == '=' || chars[pos] == ':') {
            pos += 1;
        }
    }
    while pos < chars.len() && (chars[pos] == ' ' || chars[pos] == '\t') {
        pos += 1;
    }

    (key, unescape(&chars[pos..]))
}

fn unescape(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut iter = chars.iter();
    while let Some(&c) = iter.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match iter.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(&other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Escape a key for writing: separators, comment starters, whitespace, and
/// the backslash itself.
pub fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' | '=' | ':' | '#' | '!' | ' ' => {
                out.push('\\');
                out.push(c);
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for writing: backslashes, line breaks, and leading
/// whitespace (embedded spaces survive a round trip unescaped).
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut leading = true;
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' ' if leading => out.push_str("\\ "),
            _ => out.push(c),
        }
        leading = leading && c == ' ';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_pairs() {
        let entries = parse("a=1\nb:2\nc 3\n");
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let entries = parse("# comment\n! also comment\n\n  \nkey=value\n");
        assert_eq!(entries, vec![("key".to_string(), "value".to_string())]);
    }

    #[test]
    fn parse_separator_with_padding() {
        let entries = parse("key = value\nother\t:\tstuff\n");
        assert_eq!(entries[0], ("key".to_string(), "value".to_string()));
        assert_eq!(entries[1], ("other".to_string(), "stuff".to_string()));
    }

    #[test]
    fn parse_line_without_separator() {
        let entries = parse("loneKey\n");
        assert_eq!(entries, vec![("loneKey".to_string(), String::new())]);
    }

    #[test]
    fn parse_escaped_separator_in_key() {
        let entries = parse("a\\=b=c\n");
        assert_eq!(entries, vec![("a=b".to_string(), "c".to_string())]);
    }

    #[test]
    fn parse_line_continuation() {
        let entries = parse("key=first\\\n    second\n");
        assert_eq!(entries, vec![("key".to_string(), "firstsecond".to_string())]);
    }

    #[test]
    fn parse_even_backslashes_do_not_continue() {
        let entries = parse("key=tail\\\\\nnext=1\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("key".to_string(), "tail\\".to_string()));
    }

    #[test]
    fn value_keeps_embedded_spaces() {
        let entries = parse("key=two words\n");
        assert_eq!(entries[0].1, "two words");
    }

    #[test]
    fn escape_round_trips_awkward_pairs() {
        let pairs = [
            ("plain", "value"),
            ("needs escape", "v"),
            ("a=b", "c:d"),
            ("key", " leading and inner  spaces"),
            ("tabs\tin\tkey", "line\nbreak"),
            ("back\\slash", "trail\\"),
        ];
        for (key, value) in pairs {
            let line = format!("{}={}\n", escape_key(key), escape_value(value));
            let entries = parse(&line);
            assert_eq!(entries, vec![(key.to_string(), value.to_string())], "{line:?}");
        }
    }
}
