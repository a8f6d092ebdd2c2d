//! Composite document tree.
//!
//! `Document` and `Section` are containers owning an ordered sequence of child
//! nodes, `Paragraph` is a leaf holding literal text. Structural mutation on a
//! leaf is rejected with [`DomainError::UnsupportedOperation`].

use std::fmt;
use std::io;

use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult, NodeOperation};
use crate::domain::render::Renderer;

/// Identity of a node, assigned once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    Section,
    Document,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Paragraph => write!(f, "paragraph"),
            NodeKind::Section => write!(f, "section"),
            NodeKind::Document => write!(f, "document"),
        }
    }
}

/// Element of a document tree.
///
/// Containers own their children exclusively, so a tree can never contain a
/// cycle. Nodes are not `Clone`: a copy would share the identity
/// that [`Node::remove`] matches on.
#[derive(Debug)]
pub enum Node {
    /// Leaf with literal text, immutable after construction.
    Paragraph { id: NodeId, text: String },
    /// Titled container, rendered with the section label.
    Section {
        id: NodeId,
        title: String,
        children: Vec<Node>,
    },
    /// Root-level container, rendered with the document label.
    Document {
        id: NodeId,
        title: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            id: NodeId::new(),
            text: text.into(),
        }
    }

    pub fn section(title: impl Into<String>) -> Self {
        Node::Section {
            id: NodeId::new(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn document(title: impl Into<String>) -> Self {
        Node::Document {
            id: NodeId::new(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            Node::Paragraph { id, .. } | Node::Section { id, .. } | Node::Document { id, .. } => {
                *id
            }
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Section { .. } => NodeKind::Section,
            Node::Document { .. } => NodeKind::Document,
        }
    }

    /// Title of a container, `None` for paragraphs.
    pub fn title(&self) -> Option<&str> {
        match self {
            Node::Paragraph { .. } => None,
            Node::Section { title, .. } | Node::Document { title, .. } => Some(title),
        }
    }

    /// Text of a paragraph, `None` for containers.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Paragraph { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Direct children in insertion order. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { .. } => &[],
            Node::Section { children, .. } | Node::Document { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Paragraph { .. })
    }

    pub fn is_composite(&self) -> bool {
        !self.is_leaf()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    fn children_mut(&mut self, operation: NodeOperation) -> DomainResult<&mut Vec<Node>> {
        match self {
            Node::Paragraph { .. } => Err(DomainError::UnsupportedOperation {
                operation,
                kind: NodeKind::Paragraph,
            }),
            Node::Section { children, .. } | Node::Document { children, .. } => Ok(children),
        }
    }

    /// Appends `child` to the child sequence and returns its identity.
    ///
    /// Fails on a paragraph; the rejected child is dropped.
    #[instrument(level = "trace", skip_all, fields(parent = %self.id(), child = %child.id()))]
    pub fn add(&mut self, child: Node) -> DomainResult<NodeId> {
        let kind = self.kind();
        let children = self.children_mut(NodeOperation::Add)?;
        let id = child.id();
        children.push(child);
        trace!(%kind, len = children.len(), "child appended");
        Ok(id)
    }

    /// Removes the direct child with identity `child` and hands it back.
    ///
    /// An absent child is a no-op returning `None`. A paragraph always fails,
    /// whether or not the id could match.
    #[instrument(level = "trace", skip(self), fields(parent = %self.id()))]
    pub fn remove(&mut self, child: NodeId) -> DomainResult<Option<Node>> {
        let children = self.children_mut(NodeOperation::Remove)?;
        match children.iter().position(|c| c.id() == child) {
            Some(pos) => Ok(Some(children.remove(pos))),
            None => {
                debug!("child not found, nothing removed");
                Ok(None)
            }
        }
    }

    /// Pre-order iterator over this subtree yielding `(level, node)`, the
    /// receiver at level 0.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Height of the subtree; a node without children has depth 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|(level, _)| level).max().unwrap_or(0) + 1
    }

    /// Number of nodes in the subtree, the receiver included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Searches the subtree in pre-order.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.iter().map(|(_, node)| node).find(|node| node.id() == id)
    }

    /// Renders this subtree with the default labels and a 2-space step,
    /// starting at `indent` spaces.
    pub fn render(&self, indent: usize) -> String {
        Renderer::default().render(self, indent)
    }

    /// Streams the rendering of [`Node::render`] into `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        Renderer::default().write_to(self, out, indent)
    }

    /// Prints the rendering to stdout.
    ///
    /// Panics like `print!` if stdout is closed; use [`Node::write_to`] to
    /// handle write errors.
    pub fn display(&self, indent: usize) {
        print!("{}", self.render(indent));
    }
}

impl Drop for Node {
    // Unlinks descendants onto a heap stack so dropping never recurses per level
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Paragraph { .. } => return,
            Node::Section { children, .. } | Node::Document { children, .. } => {
                std::mem::take(children)
            }
        };
        while let Some(mut node) = pending.pop() {
            if let Node::Section { children, .. } | Node::Document { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// Depth-first, pre-order traversal; children in insertion order.
pub struct PreOrderIter<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> PreOrderIter<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((level + 1, child));
        }
        Some((level, node))
    }
}
