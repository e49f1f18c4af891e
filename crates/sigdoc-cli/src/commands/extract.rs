use anyhow::Context;
use sigdoc_parser::{ExtractedMethod, ExtractionRequest};

use crate::cli::{ExtractArgs, GlobalFlags};
use crate::output::output;

/// Handle `sigdoc extract`.
pub fn handle(args: &ExtractArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = args.target.request();
    let methods = extract_methods(&request)?;
    output(&methods, flags.format)
}

/// Run the extraction and warn when the selection came back empty.
pub fn extract_methods(request: &ExtractionRequest) -> anyhow::Result<Vec<ExtractedMethod>> {
    let methods = sigdoc_parser::extract(request).with_context(|| {
        format!(
            "failed to extract methods of {} from {}",
            request.declaration_name,
            request.file_path.display()
        )
    })?;

    if methods.is_empty() {
        tracing::warn!(
            declaration = %request.declaration_name,
            file = %request.file_path.display(),
            "no methods matched"
        );
    } else {
        tracing::debug!(count = methods.len(), "extracted methods");
    }
    Ok(methods)
}
