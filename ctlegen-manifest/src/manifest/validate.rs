use miette::SourceSpan;

/// Find the span of `key` inside `[table]` in the raw TOML source.
///
/// Only looks at bare `key = value` lines, which is all ctlegen.toml uses.
pub(crate) fn find_key_span(src: &str, table: &str, key: &str) -> Option<SourceSpan> {
    let header = format!("[{table}]");
    let mut in_table = false;
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            in_table = trimmed.trim_end() == header;
        } else if in_table
            && let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::new(start.into(), key.len()));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[license]\nproject = \"x\"\n\n[format]\n  comment_wrap=4\n";
        let span = find_key_span(src, "format", "comment_wrap").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "comment_wrap");
    }

    #[test]
    fn test_find_key_span_respects_table() {
        let src = "[output]\nproject = \"x\"\n[license]\nproject = \"y\"\n";
        let span = find_key_span(src, "license", "project").unwrap();
        assert_eq!(span.offset(), src.rfind("project").unwrap());
    }

    #[test]
    fn test_find_key_span_ignores_prefixed_keys() {
        let src = "[headers]\nextensions_extra = 1\n";
        assert!(find_key_span(src, "headers", "extensions").is_none());
    }

    #[test]
    fn test_find_key_span_missing() {
        assert!(find_key_span("[format]\n", "format", "indent").is_none());
    }
}
