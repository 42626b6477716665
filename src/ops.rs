use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all valid node ids.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` refers to an existing node, i.e. `u < n`
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, counting parallel edges individually
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for (outgoing) neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex in insertion order.
    /// Parallel edges yield the same neighbor multiple times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing edges of `u`, counting parallel edges individually
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumEdges;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all edges in the graph in sorted order.
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().sorted()
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if at least one edge (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

impl<G: AdjacencyList> AdjacencyTest for G {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).contains(&v)
    }
}

/// Read access to the label index of a graph
pub trait GraphLabels: GraphNodeOrder {
    /// Returns the vertices holding `label`, or `None` if the label was never added.
    fn vertices_with(&self, label: &str) -> Option<&VertexSet>;

    /// Returns an iterator over all labels that were ever added
    fn labels(&self) -> impl Iterator<Item = &str> + '_;

    /// Returns *true* if `u` currently holds `label`
    fn has_label(&self, u: Node, label: &str) -> bool {
        self.vertices_with(label).is_some_and(|vs| vs.contains(&u))
    }

    /// Returns the number of labels that were ever added
    fn number_of_labels(&self) -> usize {
        self.labels().count()
    }

    /// Returns the labels held by `u` in sorted order.
    /// As the reverse mapping is not stored, this scans the whole index.
    fn labels_of(&self, u: Node) -> Vec<&str> {
        self.labels()
            .filter(|label| self.has_label(u, label))
            .sorted_unstable()
            .collect()
    }
}

/// Trait for creating a new graph
pub trait GraphNew {
    /// Creates an unlabelled graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to append vertices
pub trait GraphVertexEditing {
    /// Appends a new vertex without edges or labels and returns its id,
    /// which equals the number of nodes before the call.
    fn create_vertex(&mut self) -> Node;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Appends the edge `(u, v)` to the graph without deduplication.
    /// Returns *false* and leaves the graph untouched if `u >= n || v >= n`.
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_add_edge(u, v), "edge ({u},{v}) out of range");
    }

    /// Adds all edges in the collection
    /// ** Panics if any endpoint is out of range **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// Provides functions to set and unset labels
pub trait GraphLabelEditing {
    /// Adds `label` to `u`; re-adding is a no-op.
    /// Returns *false* and leaves the graph untouched if `u >= n`.
    fn try_add_label(&mut self, u: Node, label: &str) -> bool;

    /// Removes `label` from `u` if present.
    /// Returns *false* if `u >= n` and *true* otherwise, even if nothing was removed.
    fn try_remove_label(&mut self, u: Node, label: &str) -> bool;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    /// ** Panics if any endpoint is out of range **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
