//! Prompt construction for a single extracted method.

use std::path::Path;

use sigdoc_parser::ExtractedMethod;

use crate::error::RenderError;

/// Instruction placed between the few-shot example and the method block.
const INSTRUCTION: &str = "Use the provided examples of documenting methods and knowledge of \
mod-eluna and azerothcore to create markdown docs for this method:";

/// Closing guidance on the size and depth of the generated example.
const GUIDANCE: &str = "The examples should not be too simple, and should have 10-20 lines.";

/// Build the completion prompt for `method`.
///
/// The few-shot `example` comes first, followed by the instruction and a
/// `declare class` block holding the comment, name and signature.
#[must_use]
pub fn build_prompt(example: &str, method: &ExtractedMethod) -> String {
    format!(
        "{example}\n\n{INSTRUCTION}\n\ndeclare class {decl} {{\n Inline Code Comment: {comment} Method: {name} MethodSignature {signature}\n}} {GUIDANCE}",
        decl = method.declaration_name,
        comment = method.comment_text,
        name = method.method_name,
        signature = method.signature_text,
    )
}

/// Read the few-shot example file, or an empty example when none is set.
///
/// # Errors
/// Returns [`RenderError::Io`] if the file cannot be read.
pub fn load_example(path: Option<&Path>) -> Result<String, RenderError> {
    let Some(path) = path else {
        return Ok(String::new());
    };
    std::fs::read_to_string(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
