use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

/// Prefix of type-safe project accessors, e.g. `projects.account.accountDomain`.
pub const PROJECT_ACCESSOR_PREFIX: &str = "projects.";

/// Colon-delimited Gradle module path, always rooted at `:`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

/// Version-catalog reference such as `libs.kotlinCoroutines`, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryId(String);

impl ModuleId {
    /// Accepts `:a:b` as well as `a:b`; the leading colon is added when missing.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with(':') {
            Self(raw)
        } else {
            Self(format!(":{raw}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative directory of the module, one kebab-cased component per segment.
    pub fn to_path(&self) -> PathBuf {
        self.segments().map(to_kebab_case).collect()
    }

    /// `:account:account-domain` becomes `projects.account.accountDomain`.
    pub fn to_dot_notation(&self) -> String {
        let parts: Vec<String> = self.segments().map(to_camel_case).collect();
        format!("{PROJECT_ACCESSOR_PREFIX}{}", parts.join("."))
    }

    /// Parses a project accessor token; the `projects.` prefix is optional.
    pub fn from_dot_notation(token: &str) -> Self {
        let token = token.strip_prefix(PROJECT_ACCESSOR_PREFIX).unwrap_or(token);
        let parts: Vec<String> = token
            .split('.')
            .filter(|part| !part.is_empty())
            .map(to_kebab_case)
            .collect();
        Self(format!(":{}", parts.join(":")))
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0
            .strip_prefix(':')
            .unwrap_or(&self.0)
            .split(':')
            .filter(|segment| !segment.is_empty())
    }
}

impl LibraryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LibraryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `accountDomain` -> `account-domain`. Only ASCII uppercase letters start a new word.
pub fn to_kebab_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            result.push('-');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// `account-domain` -> `accountDomain`.
pub fn to_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut upper_next = false;
    for c in input.chars() {
        if c == '-' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
