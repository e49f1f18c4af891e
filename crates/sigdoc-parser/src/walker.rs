//! Declaration traversal: matches the requested declaration and emits its
//! accepted method members.

use crate::filter::FilterPolicy;
use crate::trivia::leading_comment;
use crate::types::{DeclarationNode, ExtractedMethod, ExtractionRequest, MemberKind, SourceTree};

/// Walk `tree` in pre-order and extract the methods of every declaration
/// named `request.declaration_name`.
///
/// Non-matching declarations contribute nothing themselves, but the
/// declarations nested inside them are still visited. Members of one
/// declaration are emitted contiguously, in source order.
#[must_use]
pub fn walk(tree: &SourceTree, source: &str, request: &ExtractionRequest) -> Vec<ExtractedMethod> {
    let policy = FilterPolicy::from_request(request);
    let mut methods = Vec::new();

    let mut worklist: Vec<usize> = tree.roots().iter().rev().copied().collect();
    while let Some(index) = worklist.pop() {
        let Some(decl) = tree.get(index) else {
            continue;
        };
        worklist.extend(decl.children.iter().rev());

        if decl.name != request.declaration_name {
            tracing::trace!(kind = %decl.kind, name = %decl.name, "skipping declaration");
            continue;
        }
        extract_members(decl, source, policy, &mut methods);
    }

    if methods.is_empty() {
        let available: Vec<&str> = tree.declarations().map(|d| d.name.as_str()).collect();
        tracing::debug!(
            declaration = %request.declaration_name,
            ?available,
            "no methods extracted"
        );
    }
    methods
}

fn extract_members(
    decl: &DeclarationNode,
    source: &str,
    policy: FilterPolicy<'_>,
    out: &mut Vec<ExtractedMethod>,
) {
    for member in &decl.members {
        let (MemberKind::Method, Some(name)) = (member.kind, member.name.as_deref()) else {
            continue;
        };

        if !policy.accepts(name) {
            tracing::trace!(declaration = %decl.name, method = name, "filtered out");
            continue;
        }

        let Some(signature) = source.get(member.span.clone()) else {
            continue;
        };
        let method = ExtractedMethod {
            declaration_name: decl.name.clone(),
            method_name: name.to_string(),
            signature_text: signature.to_string(),
            comment_text: leading_comment(source, member),
        };
        tracing::trace!(
            method = %method.qualified_name(),
            commented = method.has_comment(),
            "extracted"
        );
        out.push(method);
    }
}
