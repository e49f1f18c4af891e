//! # sigdoc-parser
//!
//! Method signature and comment extraction from TypeScript declaration files.
//!
//! For a named class or interface, [`extract`] returns every method member in
//! source order with its verbatim signature text and the comment that
//! immediately precedes it, filtered by optional include/exclude name lists.
//!
//! Pipeline: source text -> [`parse_source`] (ast-grep, tree-sitter
//! TypeScript grammar) -> [`SourceTree`] -> [`walk`] (applying
//! [`FilterPolicy`] and [`leading_comment`]) -> `Vec<ExtractedMethod>`.
//!
//! ```no_run
//! use sigdoc_parser::{ExtractionRequest, extract};
//!
//! let request = ExtractionRequest::new("types/player.d.ts", "Player").with_exclude(["Kill"]);
//! for method in extract(&request).expect("extraction") {
//!     println!("{}: {}", method.qualified_name(), method.signature_text);
//! }
//! ```

pub mod error;
pub mod filter;
pub mod parser;
pub mod trivia;
pub mod types;
pub mod walker;

pub use error::ParserError;
pub use filter::FilterPolicy;
pub use parser::{SourceLang, parse_source};
pub use trivia::leading_comment;
pub use types::{
    DeclarationKind, DeclarationNode, ExtractedMethod, ExtractionRequest, MemberKind, MemberNode,
    SourceTree, parse_name_list,
};
pub use walker::walk;

/// Read, parse and walk the file named by `request`.
///
/// # Errors
/// Returns [`ParserError::Io`] if the file cannot be read and
/// [`ParserError::ParseFailed`] if it cannot be parsed. Nothing is returned
/// for a file that fails part-way.
pub fn extract(request: &ExtractionRequest) -> Result<Vec<ExtractedMethod>, ParserError> {
    let source =
        std::fs::read_to_string(&request.file_path).map_err(|source| ParserError::Io {
            path: request.file_path.clone(),
            source,
        })?;
    let lang = SourceLang::from_path(&request.file_path);
    tracing::debug!(
        file = %request.file_path.display(),
        %lang,
        bytes = source.len(),
        "parsing declaration file"
    );
    extract_from_source(&source, lang, request)
}

/// Extract from in-memory source. `request.file_path` is not read.
///
/// # Errors
/// Returns [`ParserError::ParseFailed`] if the source cannot be parsed.
pub fn extract_from_source(
    source: &str,
    lang: SourceLang,
    request: &ExtractionRequest,
) -> Result<Vec<ExtractedMethod>, ParserError> {
    let tree = parse_source(source, lang)?;
    if tree.is_empty() {
        tracing::debug!(%lang, "no class or interface declarations in source");
    } else {
        tracing::debug!(%lang, declarations = tree.len(), "parsed declaration tree");
    }
    Ok(walk(&tree, source, request))
}
