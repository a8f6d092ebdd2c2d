//! Text rendering of document trees.
//!
//! Two styles share the same pre-order sequence of labels:
//! - `Indent`: every line prefixed by `indent + level * indent_step` spaces
//! - `Tree`: box-drawn branches via `termtree`

use std::fmt;
use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::node::Node;

pub const DEFAULT_INDENT_STEP: usize = 2;

/// Label language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language '{other}' (expected: ru, en)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Ru => write!(f, "ru"),
            Language::En => write!(f, "en"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    #[default]
    Indent,
    Tree,
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "indent" => Ok(RenderStyle::Indent),
            "tree" => Ok(RenderStyle::Tree),
            other => Err(format!("unknown style '{other}' (expected: indent, tree)")),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Indent => write!(f, "indent"),
            RenderStyle::Tree => write!(f, "tree"),
        }
    }
}

/// Prefixes written before container titles. Paragraphs carry no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub section: String,
    pub document: String,
}

impl Labels {
    pub fn russian() -> Self {
        Self {
            section: "Раздел: ".to_string(),
            document: "Документ: ".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            section: "Section: ".to_string(),
            document: "Document: ".to_string(),
        }
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Ru => Self::russian(),
            Language::En => Self::english(),
        }
    }

    /// Single-line label of `node`, without indentation.
    pub fn label(&self, node: &Node) -> String {
        match node {
            Node::Paragraph { text, .. } => text.clone(),
            Node::Section { title, .. } => format!("{}{}", self.section, title),
            Node::Document { title, .. } => format!("{}{}", self.document, title),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::russian()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per level for `RenderStyle::Indent`; the tree style always
    /// draws fixed-width `termtree` branches and ignores it.
    pub indent_step: usize,
    pub labels: Labels,
    pub style: RenderStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
            labels: Labels::default(),
            style: RenderStyle::default(),
        }
    }
}

/// Renders nodes according to [`RenderOptions`]. Never mutates the tree.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Output lines for `node` and its descendants, starting at `indent` spaces.
    #[instrument(level = "trace", skip(self, node), fields(style = %self.options.style))]
    pub fn lines(&self, node: &Node, indent: usize) -> Vec<String> {
        match self.options.style {
            RenderStyle::Indent => node
                .iter()
                .map(|(level, n)| {
                    let width = indent + level * self.options.indent_step;
                    format!("{:width$}{}", "", self.options.labels.label(n))
                })
                .collect(),
            RenderStyle::Tree => {
                let pad = " ".repeat(indent);
                self.to_tree(node)
                    .to_string()
                    .lines()
                    .map(|line| format!("{pad}{line}"))
                    .collect()
            }
        }
    }

    /// Rendering as a single string, every line newline-terminated.
    pub fn render(&self, node: &Node, indent: usize) -> String {
        let mut out = String::new();
        for line in self.lines(node, indent) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn write_to<W: io::Write>(&self, node: &Node, out: &mut W, indent: usize) -> io::Result<()> {
        for line in self.lines(node, indent) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Converts the subtree into a `termtree` tree of labels.
    ///
    /// Built in post-order on an explicit stack: a node's tree is assembled
    /// once all of its children's trees are finished.
    pub fn to_tree(&self, node: &Node) -> Tree<String> {
        let mut stack = vec![(node, false)];
        let mut finished: Vec<Tree<String>> = Vec::new();
        while let Some((current, visited)) = stack.pop() {
            if visited {
                let leaves = finished.split_off(finished.len() - current.len());
                finished.push(Tree::new(self.options.labels.label(current)).with_leaves(leaves));
            } else {
                stack.push((current, true));
                for child in current.children().iter().rev() {
                    stack.push((child, false));
                }
            }
        }
        finished
            .pop()
            .unwrap_or_else(|| Tree::new(self.options.labels.label(node)))
    }
}
