//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

use crate::domain::node::NodeKind;

/// Structural operation attempted on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOperation {
    Add,
    Remove,
}

impl fmt::Display for NodeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOperation::Add => write!(f, "add"),
            NodeOperation::Remove => write!(f, "remove"),
        }
    }
}

/// Domain errors represent contract violations on the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported operation: cannot {operation} children on a {kind}")]
    UnsupportedOperation {
        operation: NodeOperation,
        kind: NodeKind,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
