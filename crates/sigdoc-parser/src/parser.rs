//! ast-grep wrapper: language detection and declaration tree construction.

use std::ops::Range;
use std::path::Path;

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;
use crate::types::{DeclarationKind, DeclarationNode, MemberKind, MemberNode, SourceTree};

/// The concrete AST tree type produced by ast-grep.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Longest snippet of offending source quoted in a parse error.
const SNIPPET_CHARS: usize = 40;

/// Grammar used to parse a declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLang {
    TypeScript,
    Tsx,
}

impl SourceLang {
    /// Pick the grammar from a file extension.
    ///
    /// `.tsx` selects TSX; everything else, including unknown extensions,
    /// is parsed as TypeScript.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("tsx") => Self::Tsx,
            Some("ts" | "mts" | "cts") => Self::TypeScript,
            other => {
                tracing::debug!(
                    path = %path.display(),
                    extension = ?other,
                    "unrecognized extension; parsing as TypeScript"
                );
                Self::TypeScript
            }
        }
    }

    #[must_use]
    pub const fn support_lang(self) -> SupportLang {
        match self {
            Self::TypeScript => SupportLang::TypeScript,
            Self::Tsx => SupportLang::Tsx,
        }
    }
}

impl std::fmt::Display for SourceLang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TypeScript => "TypeScript",
            Self::Tsx => "TSX",
        };
        write!(f, "{s}")
    }
}

/// Parse source text into the declaration tree.
///
/// Walks the syntax tree once in pre-order. Class and interface
/// declarations are attached to the nearest enclosing declaration using an
/// explicit ancestor stack, so nesting depth never grows the call stack.
///
/// # Errors
/// Returns [`ParserError::ParseFailed`] at the first `ERROR` or `MISSING`
/// node; no partial tree is returned.
pub fn parse_source(source: &str, lang: SourceLang) -> Result<SourceTree, ParserError> {
    let ast: AstTree = lang.support_lang().ast_grep(source);
    let root = ast.root();

    let mut tree = SourceTree::default();
    // (end byte, tree index) of declarations still open at the cursor.
    let mut open: Vec<(usize, usize)> = Vec::new();

    for node in root.dfs() {
        if node.is_error() || node.is_missing() {
            return Err(syntax_error(&node, source, lang));
        }

        let Some(kind) = declaration_kind(&node) else {
            continue;
        };
        let Some(name) = node.field("name").map(|n| n.text().to_string()) else {
            continue;
        };

        let span = node.range();
        while open.last().is_some_and(|&(end, _)| end <= span.start) {
            open.pop();
        }
        let parent = open.last().map(|&(_, index)| index);

        let members = node
            .field("body")
            .map(|body| collect_members(&body, kind, source))
            .unwrap_or_default();

        tracing::trace!(%kind, %name, members = members.len(), "declaration");
        let end = span.end;
        let index = tree.push(
            DeclarationNode {
                kind,
                name,
                span,
                members,
                children: Vec::new(),
            },
            parent,
        );
        open.push((end, index));
    }

    Ok(tree)
}

fn declaration_kind<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<DeclarationKind> {
    match node.kind().as_ref() {
        // `class` is both the class-expression node and the keyword token;
        // only the expression carries a body.
        "class" if node.field("body").is_none() => None,
        "class_declaration" | "abstract_class_declaration" | "class" => {
            Some(DeclarationKind::Class)
        }
        "interface_declaration" => Some(DeclarationKind::Interface),
        _ => None,
    }
}

/// Split a class or interface body into members.
///
/// Comments are trivia and never members. Decorators open the span of the
/// member they precede. A `;` or `,` directly following a member is part of
/// that member's span.
fn collect_members<D: ast_grep_core::Doc>(
    body: &Node<D>,
    owner: DeclarationKind,
    source: &str,
) -> Vec<MemberNode> {
    let mut members = Vec::new();
    let mut cursor = body.range().start;
    let mut decorator_start: Option<usize> = None;

    for child in body.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "comment" | "}" => {}
            "decorator" => {
                decorator_start.get_or_insert(child.range().start);
            }
            "{" | ";" | "," => cursor = child.range().end,
            _ => {
                let start = decorator_start.take().unwrap_or(child.range().start);
                let end = separator_end(source, child.range().end);

                members.push(MemberNode {
                    kind: member_kind(&child, owner),
                    name: child.field("name").map(|n| n.text().to_string()),
                    span: start..end,
                    leading_trivia: cursor..start,
                });
                cursor = end;
            }
        }
    }

    members
}

/// Extend a member end over a directly following `;` or `,`.
///
/// The separator is read from the source text: depending on the grammar
/// rule it is either a visible sibling token or folded into a hidden
/// automatic-semicolon token.
fn separator_end(source: &str, end: usize) -> usize {
    let rest = source.get(end..).unwrap_or_default();
    let gap = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    match rest.as_bytes().get(gap) {
        Some(b';' | b',') => end + gap + 1,
        _ => end,
    }
}

fn member_kind<D: ast_grep_core::Doc>(node: &Node<D>, owner: DeclarationKind) -> MemberKind {
    match node.kind().as_ref() {
        "method_signature" | "method_definition" | "abstract_method_signature" => {
            if node
                .children()
                .any(|c| c.kind().as_ref() == "get" || c.kind().as_ref() == "set")
            {
                return MemberKind::Accessor;
            }
            let is_constructor = node
                .field("name")
                .is_some_and(|n| n.text().as_ref() == "constructor");
            match owner {
                DeclarationKind::Class if is_constructor => MemberKind::Constructor,
                DeclarationKind::Class | DeclarationKind::Interface => MemberKind::Method,
            }
        }
        "public_field_definition" | "property_signature" => MemberKind::Property,
        "index_signature" => MemberKind::IndexSignature,
        "call_signature" | "construct_signature" => MemberKind::CallSignature,
        _ => MemberKind::Other,
    }
}

fn syntax_error<D: ast_grep_core::Doc>(
    node: &Node<D>,
    source: &str,
    lang: SourceLang,
) -> ParserError {
    let Range { start, .. } = node.range();
    let (line, column) = line_column(source, start);
    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let snippet: String = node.text().chars().take(SNIPPET_CHARS).collect();
        format!("unexpected `{}`", snippet.trim())
    };
    ParserError::ParseFailed {
        language: lang.to_string(),
        line,
        column,
        message,
    }
}

/// 1-based line and column (in characters) of a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> SourceTree {
        parse_source(source, SourceLang::TypeScript).expect("source should parse")
    }

    fn member_texts<'a>(source: &'a str, decl: &DeclarationNode) -> Vec<&'a str> {
        decl.members
            .iter()
            .map(|m| &source[m.span.clone()])
            .collect()
    }

    #[test]
    fn detect_typescript_variants() {
        assert_eq!(
            SourceLang::from_path(Path::new("player.d.ts")),
            SourceLang::TypeScript
        );
        assert_eq!(
            SourceLang::from_path(Path::new("mod.mts")),
            SourceLang::TypeScript
        );
        assert_eq!(SourceLang::from_path(Path::new("App.tsx")), SourceLang::Tsx);
    }

    #[test]
    fn detect_unknown_falls_back_to_typescript() {
        assert_eq!(
            SourceLang::from_path(Path::new("api.txt")),
            SourceLang::TypeScript
        );
        assert_eq!(
            SourceLang::from_path(Path::new("README")),
            SourceLang::TypeScript
        );
    }

    #[test]
    fn interface_members_with_separators() {
        let source = "interface A {\n  Foo(x: number): void;\n  Bar(): void;\n}\n";
        let tree = parse(source);
        let decl = tree.get(0).expect("one declaration");
        assert_eq!(decl.kind, DeclarationKind::Interface);
        assert_eq!(decl.name, "A");
        assert_eq!(
            member_texts(source, decl),
            vec!["Foo(x: number): void;", "Bar(): void;"]
        );
    }

    #[test]
    fn declare_class_members_are_classified() {
        let source = r"declare class Unit {
    constructor(guid: number);
    readonly level: number;
    [key: string]: unknown;
    get name(): string;
    Kill(target?: Unit): void;
}
";
        let tree = parse(source);
        let decl = tree.get(0).expect("one declaration");
        assert_eq!(decl.kind, DeclarationKind::Class);
        let kinds: Vec<_> = decl.members.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MemberKind::Constructor,
                MemberKind::Property,
                MemberKind::IndexSignature,
                MemberKind::Accessor,
                MemberKind::Method,
            ]
        );
        assert_eq!(decl.members[4].name.as_deref(), Some("Kill"));
    }

    #[test]
    fn trivia_spans_cover_gap_since_previous_member() {
        let source = "interface A {\n  a(): void;\n  // note\n  b(): void;\n}";
        let tree = parse(source);
        let decl = tree.get(0).expect("one declaration");
        let second = &decl.members[1];
        assert_eq!(&source[second.leading_trivia.clone()], "\n  // note\n  ");
    }

    #[test]
    fn first_member_trivia_starts_after_open_brace() {
        let source = "/** header */\ninterface A {\n  a(): void;\n}";
        let tree = parse(source);
        let first = &tree.get(0).expect("declaration").members[0];
        assert_eq!(&source[first.leading_trivia.clone()], "\n  ");
    }

    #[test]
    fn decorators_open_member_span() {
        let source = "class Service {\n  @memo()\n  load(id: string): void {}\n}";
        let tree = parse(source);
        let decl = tree.get(0).expect("declaration");
        assert_eq!(
            member_texts(source, decl),
            vec!["@memo()\n  load(id: string): void {}"]
        );
    }

    #[test]
    fn nested_declarations_link_to_parent() {
        let source = r"declare namespace Outer {
    interface Inner {
        a(): void;
    }
}
interface Sibling {
    b(): void;
}
";
        let tree = parse(source);
        let names: Vec<_> = tree.declarations().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Inner", "Sibling"]);
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn class_inside_class_method_is_a_child() {
        let source = r"class Outer {
    make() {
        return class Inner {
            run(): void {}
        };
    }
}
";
        let tree = parse(source);
        assert_eq!(tree.roots(), &[0]);
        let outer = tree.get(0).expect("outer");
        assert_eq!(outer.children, vec![1]);
        assert_eq!(tree.get(1).map(|d| d.name.as_str()), Some("Inner"));
    }

    #[test]
    fn unbalanced_brace_fails() {
        let err = parse_source("interface A {\n  Foo(): void;\n", SourceLang::TypeScript)
            .expect_err("unterminated body should fail");
        assert!(err.is_parse_failure());
    }

    #[test]
    fn unterminated_block_comment_fails() {
        let err = parse_source(
            "interface A {\n  /** never closed\n  Foo(): void;\n}\n",
            SourceLang::TypeScript,
        )
        .expect_err("unterminated comment should fail");
        assert!(err.is_parse_failure());
    }

    #[test]
    fn empty_source_yields_empty_tree() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn line_column_is_one_based() {
        let source = "ab\ncd";
        assert_eq!(line_column(source, 0), (1, 1));
        assert_eq!(line_column(source, 4), (2, 2));
    }
}
