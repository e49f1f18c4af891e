//! Include/exclude policy over method names.

use std::collections::BTreeSet;

use crate::types::ExtractionRequest;

/// Allow-list/deny-list check borrowed from an [`ExtractionRequest`].
///
/// Exact, case-sensitive string equality. Exclusion is evaluated first, so a
/// name present in both lists is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPolicy<'a> {
    include: Option<&'a BTreeSet<String>>,
    exclude: Option<&'a BTreeSet<String>>,
}

impl<'a> FilterPolicy<'a> {
    #[must_use]
    pub const fn new(
        include: Option<&'a BTreeSet<String>>,
        exclude: Option<&'a BTreeSet<String>>,
    ) -> Self {
        Self { include, exclude }
    }

    #[must_use]
    pub const fn from_request(request: &'a ExtractionRequest) -> Self {
        Self::new(request.include_names.as_ref(), request.exclude_names.as_ref())
    }

    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.is_some_and(|names| names.contains(name))
    }

    #[must_use]
    pub fn is_included(&self, name: &str) -> bool {
        self.include.is_none_or(|names| names.contains(name))
    }

    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        !self.is_excluded(name) && self.is_included(name)
    }
}
