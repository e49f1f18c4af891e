use serde::{Deserialize, Serialize};

/// A single method member extracted from a class or interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMethod {
    /// Name of the enclosing class or interface.
    pub declaration_name: String,
    /// Method identifier as written in the source.
    pub method_name: String,
    /// Verbatim source text of the member, separator included.
    pub signature_text: String,
    /// Leading comment block, trimmed. Empty when the member has none.
    pub comment_text: String,
}

impl ExtractedMethod {
    /// `Declaration.method`, used in log lines and progress output.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.declaration_name, self.method_name)
    }

    #[must_use]
    pub fn has_comment(&self) -> bool {
        !self.comment_text.is_empty()
    }
}
