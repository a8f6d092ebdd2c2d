//! Domain layer: the composite document tree and its rendering
//!
//! This layer is independent of external concerns (no config loading, no CLI).

pub mod error;
pub mod node;
pub mod render;

pub use error::{DomainError, DomainResult, NodeOperation};
pub use node::{Node, NodeId, NodeKind, PreOrderIter};
pub use render::{Labels, Language, RenderOptions, RenderStyle, Renderer, DEFAULT_INDENT_STEP};
