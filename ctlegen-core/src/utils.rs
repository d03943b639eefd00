/// Convert text into a preprocessor-define style identifier.
///
/// Uppercases and replaces `-`, space and `.` with underscores.
///
/// # Examples
///
/// ```
/// use ctlegen_core::to_define;
///
/// assert_eq!(to_define("Foo-Bar.h"), "FOO_BAR_H");
/// ```
pub fn to_define(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '-' | ' ' | '.' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Derive the include-guard token for a header.
///
/// The token is `to_define("{prefix}_{project}_{file_name}_{postfix}")`, so the
/// same inputs always give the same token.
///
/// ```
/// use ctlegen_core::guard_token;
///
/// assert_eq!(guard_token("", "ctle", "types.h", ""), "_CTLE_TYPES_H_");
/// ```
pub fn guard_token(prefix: &str, project: &str, file_name: &str, postfix: &str) -> String {
    to_define(&format!("{prefix}_{project}_{file_name}_{postfix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_define() {
        assert_eq!(to_define("status.h"), "STATUS_H");
        assert_eq!(to_define("my file-name.inl"), "MY_FILE_NAME_INL");
        assert_eq!(to_define("already_OK"), "ALREADY_OK");
    }

    #[test]
    fn test_guard_token_is_deterministic() {
        let first = guard_token("", "proj", "Foo-Bar.h", "");
        let second = guard_token("", "proj", "Foo-Bar.h", "");
        assert_eq!(first, second);
        assert_eq!(first, "_PROJ_FOO_BAR_H_");
    }

    #[test]
    fn test_guard_token_distinct_for_distinct_files() {
        let names = ["types.h", "ntup.h", "status.h", "prop.h", "status_return.h"];
        let mut tokens: Vec<String> = names
            .iter()
            .map(|name| guard_token("", "ctle", name, ""))
            .collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), names.len());
    }

    #[test]
    fn test_guard_token_with_prefix_and_postfix() {
        assert_eq!(guard_token("MY", "ctle", "a.h", "V2"), "MY_CTLE_A_H_V2");
    }
}
