use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Input to a single extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub file_path: PathBuf,
    /// Exact, case-sensitive class or interface name.
    pub declaration_name: String,
    /// Allow-list of method names. `None` admits every name.
    pub include_names: Option<BTreeSet<String>>,
    /// Deny-list of method names. Evaluated before the allow-list.
    pub exclude_names: Option<BTreeSet<String>>,
}

impl ExtractionRequest {
    #[must_use]
    pub fn new(file_path: impl AsRef<Path>, declaration_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            declaration_name: declaration_name.into(),
            include_names: None,
            exclude_names: None,
        }
    }

    #[must_use]
    pub fn with_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Split a comma-separated name list as supplied on the command line.
///
/// Entries are trimmed and empty entries dropped, so `"Foo, Bar,"` yields
/// `{"Bar", "Foo"}`.
#[must_use]
pub fn parse_name_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
