//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (line terminators differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Count lines that open and close braces, ignoring comments and strings.
///
/// Generated C++ should always come out balanced.
pub fn brace_balance(text: &str) -> isize {
    let mut balance = 0;
    for line in text.lines() {
        let code = line.split("//").next().unwrap_or_default();
        let mut in_string = false;
        let mut escaped = false;
        for c in code.chars() {
            match c {
                '\\' if in_string => escaped = !escaped,
                '"' if !escaped => in_string = !in_string,
                '{' if !in_string => balance += 1,
                '}' if !in_string => balance -= 1,
                _ => escaped = false,
            }
            if c != '\\' {
                escaped = false;
            }
        }
    }
    balance
}
