//! Host-supplied syntax facts for a source unit.
//!
//! The parser and scope-resolution engine live in the embedding host. What
//! rules see is the pre-digested view defined here: top-level nodes in
//! source order, each carrying its kind, its lexical scope depth, the span
//! of its tokens, and (for variable declarations) the declared bindings
//! with their initializer expressions rendered back to source text.

use std::path::{Path, PathBuf};

/// The closed set of node kinds rules can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A `var`/`let`/`const` declaration statement.
    VariableDeclaration,
    /// A `//` comment.
    LineComment,
    /// A `/* ... */` comment.
    BlockComment,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableDeclaration => write!(f, "VariableDeclaration"),
            Self::LineComment => write!(f, "LineComment"),
            Self::BlockComment => write!(f, "BlockComment"),
        }
    }
}

/// Token extent of a node, as reported by the host's lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line on which the node's first token starts (1-indexed).
    pub start_line: usize,
    /// Column of the node's first token (1-indexed).
    pub start_column: usize,
    /// Line on which the node's last token ends (1-indexed).
    pub end_line: usize,
    /// Byte offset of the node in the unit.
    pub offset: usize,
    /// Length of the node in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span from line/column information.
    #[must_use]
    pub fn new(start_line: usize, start_column: usize, end_line: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte range for this span.
    #[must_use]
    pub fn with_byte_range(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// One declared binding within a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    /// The binding pattern as written (e.g. `a` or `{z}`).
    pub name: String,
    /// The initializer expression rendered back to source text by the host,
    /// or `None` when the binding has no initializer.
    pub init: Option<String>,
}

impl Declarator {
    /// Creates a declarator.
    #[must_use]
    pub fn new(name: impl Into<String>, init: Option<&str>) -> Self {
        Self {
            name: name.into(),
            init: init.map(String::from),
        }
    }
}

/// Kind-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// A declaration statement with its bindings in source order.
    VariableDeclaration {
        /// The declared bindings.
        declarators: Vec<Declarator>,
    },
    /// A `//` comment.
    LineComment,
    /// A `/* ... */` comment.
    BlockComment,
}

/// A top-level node handed to rules by the host, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Depth of the innermost lexical scope containing the node.
    /// 0 means the node is at the top level of the source unit.
    pub scope_depth: usize,
    /// Token extent of the node.
    pub span: Span,
    /// Kind-specific payload.
    pub data: NodeData,
}

impl Node {
    /// Creates a variable-declaration node.
    #[must_use]
    pub fn variable_declaration(span: Span, scope_depth: usize, declarators: Vec<Declarator>) -> Self {
        Self {
            scope_depth,
            span,
            data: NodeData::VariableDeclaration { declarators },
        }
    }

    /// Creates a line-comment node.
    #[must_use]
    pub fn line_comment(span: Span, scope_depth: usize) -> Self {
        Self {
            scope_depth,
            span,
            data: NodeData::LineComment,
        }
    }

    /// Creates a block-comment node.
    #[must_use]
    pub fn block_comment(span: Span, scope_depth: usize) -> Self {
        Self {
            scope_depth,
            span,
            data: NodeData::BlockComment,
        }
    }

    /// Returns the kind tag for this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            NodeData::LineComment => NodeKind::LineComment,
            NodeData::BlockComment => NodeKind::BlockComment,
        }
    }
}

/// One parsed file's worth of top-level nodes, constructed by the host.
#[derive(Debug, Clone, Default)]
pub struct SourceUnit {
    /// Path of the unit, used for violation locations.
    pub path: PathBuf,
    /// Nodes in source order.
    pub nodes: Vec<Node>,
}

impl SourceUnit {
    /// Creates an empty unit for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            nodes: Vec::new(),
        }
    }

    /// Appends a node. Hosts must push nodes in source order.
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a node, builder style.
    #[must_use]
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Returns the path of this unit.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_tags() {
        let decl = Node::variable_declaration(
            Span::new(1, 1, 1),
            0,
            vec![Declarator::new("a", Some("require(\"a\")"))],
        );
        assert_eq!(decl.kind(), NodeKind::VariableDeclaration);
        assert_eq!(Node::line_comment(Span::new(2, 1, 2), 0).kind(), NodeKind::LineComment);
        assert_eq!(Node::block_comment(Span::new(3, 1, 4), 0).kind(), NodeKind::BlockComment);
    }

    #[test]
    fn unit_preserves_node_order() {
        let unit = SourceUnit::new("app.js")
            .with_node(Node::line_comment(Span::new(1, 1, 1), 0))
            .with_node(Node::line_comment(Span::new(2, 1, 2), 0));
        assert_eq!(unit.nodes.len(), 2);
        assert_eq!(unit.nodes[0].span.start_line, 1);
        assert_eq!(unit.nodes[1].span.start_line, 2);
    }

    #[test]
    fn span_byte_range() {
        let span = Span::new(1, 1, 1).with_byte_range(10, 22);
        assert_eq!(span.offset, 10);
        assert_eq!(span.length, 22);
    }
}
