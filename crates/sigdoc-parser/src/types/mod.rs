//! Core data types: extraction input, output records, and the declaration tree.

mod extracted_method;
mod extraction_request;
mod source_tree;

pub use extracted_method::ExtractedMethod;
pub use extraction_request::{ExtractionRequest, parse_name_list};
pub use source_tree::{DeclarationKind, DeclarationNode, MemberKind, MemberNode, SourceTree};
