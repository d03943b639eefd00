/// Describes an include guard: `#pragma once` plus `#ifndef`/`#define`.
///
/// The token is derived with [`ctlegen_core::guard_token`]; when no project is
/// set, the project of the buffer's license header is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderGuard {
    pub file_name: String,
    pub project: Option<String>,
    pub prefix: String,
    pub postfix: String,
}

impl HeaderGuard {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Token for this guard, falling back to `default_project`.
    pub fn token(&self, default_project: &str) -> String {
        let project = self.project.as_deref().unwrap_or(default_project);
        ctlegen_core::guard_token(&self.prefix, project, &self.file_name, &self.postfix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_uses_default_project() {
        assert_eq!(HeaderGuard::new("ntup.h").token("ctle"), "_CTLE_NTUP_H_");
    }

    #[test]
    fn test_token_explicit_project_wins() {
        let guard = HeaderGuard::new("a.h").project("other");
        assert_eq!(guard.token("ctle"), "_OTHER_A_H_");
    }
}
