use thiserror::Error;

use crate::{Edge, Node, NumNodes};

/// Errors raised while configuring a [`GraphStore`](crate::GraphStore).
///
/// Query-time failures are never reported through this type: mutations return `false` and
/// searches return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A label was assigned to a vertex beyond the declared vertex count.
    #[error("label {label:?} references vertex {vertex}, but only {vertex_count} vertices were declared")]
    LabelOutOfRange {
        label: String,
        vertex: Node,
        vertex_count: NumNodes,
    },

    /// An edge endpoint lies beyond the declared vertex count.
    #[error("edge {edge} references a vertex beyond the {vertex_count} declared vertices")]
    EdgeOutOfRange { edge: Edge, vertex_count: NumNodes },

    /// A strategy name could not be parsed.
    #[error("unknown traversal strategy: {0}")]
    InvalidStrategy(String),
}
