/// Wrap `text` into `// ` comment lines.
///
/// Words are packed greedily so that the text after the marker never exceeds
/// `width` characters. Runs of whitespace collapse to one space, and a word
/// longer than `width` is split across lines. Blank input yields a single
/// `//` line.
pub fn wrap_comment(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace().flat_map(|w| chunks(w, width)) {
        let len = word.chars().count();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(format!("// {current}"));
            current.clear();
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += len;
    }

    if current_len > 0 {
        lines.push(format!("// {current}"));
    }
    if lines.is_empty() {
        lines.push("//".to_string());
    }
    lines
}

/// Split `word` into pieces of at most `width` characters.
fn chunks(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in word.char_indices() {
        if count == width {
            pieces.push(&word[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    pieces.push(&word[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(line: &str) -> &str {
        line.strip_prefix("// ").unwrap()
    }

    #[test]
    fn test_empty_is_single_marker() {
        assert_eq!(wrap_comment("", 120), vec!["//"]);
        assert_eq!(wrap_comment("   \t ", 120), vec!["//"]);
    }

    #[test]
    fn test_short_comment_is_one_line() {
        assert_eq!(wrap_comment("hello world", 120), vec!["// hello world"]);
    }

    #[test]
    fn test_width_excludes_marker() {
        let lines = wrap_comment("aaaa bbbb cccc", 9);
        assert_eq!(lines, vec!["// aaaa bbbb", "// cccc"]);
    }

    #[test]
    fn test_wrapped_lines_respect_width_and_rejoin() {
        let text = "The status class wraps a status code and provides helper methods to check \
                    for success and failure, and to convert to and from std::errc values.";
        for width in [16, 20, 37, 80] {
            let lines = wrap_comment(text, width);
            for line in &lines {
                assert!(body(line).chars().count() <= width, "{line:?} wider than {width}");
            }
            let rejoined: Vec<&str> = lines.iter().map(|l| body(l)).collect();
            assert_eq!(rejoined.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }

    #[test]
    fn test_long_word_is_split() {
        let lines = wrap_comment("abcdefghij", 4);
        assert_eq!(lines, vec!["// abcd", "// efgh", "// ij"]);
    }

    #[test]
    fn test_whitespace_is_normalised() {
        assert_eq!(wrap_comment("a\n\n  b\tc", 120), vec!["// a b c"]);
    }
}
