use std::ops::Range;

/// Kind of a type declaration that can own method members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Interface,
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Class => "class",
            Self::Interface => "interface",
        };
        write!(f, "{s}")
    }
}

/// Kind of a declaration member.
///
/// Only [`MemberKind::Method`] members are ever extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Constructor,
    Accessor,
    Property,
    IndexSignature,
    CallSignature,
    Other,
}

impl MemberKind {
    #[must_use]
    pub const fn is_method(self) -> bool {
        matches!(self, Self::Method)
    }
}

/// A member of a class or interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberNode {
    pub kind: MemberKind,
    /// Source text of the member's name, when it has one.
    pub name: Option<String>,
    /// Byte span from the first token (decorators included) through the
    /// terminating separator.
    pub span: Range<usize>,
    /// Byte span of the whitespace and comments between the previous
    /// member (or the opening brace) and `span.start`.
    pub leading_trivia: Range<usize>,
}

/// A named class or interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
    pub kind: DeclarationKind,
    pub name: String,
    pub span: Range<usize>,
    /// Members in source order.
    pub members: Vec<MemberNode>,
    /// Indices of directly nested declarations, in source order.
    pub children: Vec<usize>,
}

/// Declarations found in one source file.
///
/// Nodes are stored in pre-order; `roots` holds the outermost declarations
/// and each node lists the indices of the declarations nested inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTree {
    nodes: Vec<DeclarationNode>,
    roots: Vec<usize>,
}

impl SourceTree {
    /// Append a declaration, attaching it under `parent` or as a root.
    ///
    /// Returns the index of the new node.
    pub(crate) fn push(&mut self, node: DeclarationNode, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent) => parent.children.push(index),
            None => self.roots.push(index),
        }
        index
    }

    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DeclarationNode> {
        self.nodes.get(index)
    }

    /// All declarations in pre-order.
    pub fn declarations(&self) -> impl Iterator<Item = &DeclarationNode> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
