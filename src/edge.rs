use std::fmt::{Debug, Display};

use crate::Node;

/// A directed edge `(from, to)` with implicit weight 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Edges are counted in `u64`: parallel edges are kept, so the number of edges is not
/// bounded by the number of node pairs.
pub type NumEdges = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Origin of the edge
    pub fn source(&self) -> Node {
        self.0
    }

    /// Endpoint of the edge
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Edge(3, 7).to_string(), "(3,7)");
        assert_eq!(format!("{:?}", Edge(0, 0)), "(0,0)");
    }

    #[test]
    fn endpoints() {
        let e: Edge = (2, 5).into();
        assert_eq!(e.source(), 2);
        assert_eq!(e.target(), 5);
        assert!(!e.is_loop());
        assert!(Edge(4, 4).is_loop());
    }
}
