use fxhash::FxHashMap;
use tracing::trace;

use super::*;

/// A directed, unweighted graph whose vertices carry sets of string labels.
///
/// - Outgoing adjacency is stored as one array per vertex, in insertion order.
/// - Parallel edges and self-loops are kept as given.
/// - Labels are stored as `label -> vertices`, the reverse direction is not materialized.
///
/// The graph is pure storage; queries live in [`crate::algo`].
#[derive(Clone, Debug, Default)]
pub struct LabelledGraph {
    out_nbs: Vec<Vec<Node>>,
    labels: LabelIndex,
    num_edges: NumEdges,
}

impl LabelledGraph {
    /// Returns a slice-reference of the out-neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.out_nbs[u as usize]
    }

    /// Returns the full label index
    pub fn label_index(&self) -> &LabelIndex {
        &self.labels
    }
}

impl GraphNodeOrder for LabelledGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for LabelledGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for LabelledGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        self.out_nbs[u as usize].len() as NumEdges
    }
}

impl GraphLabels for LabelledGraph {
    fn vertices_with(&self, label: &str) -> Option<&VertexSet> {
        self.labels.get(label)
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.keys().map(String::as_str)
    }
}

impl GraphNew for LabelledGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Vec::new(); n as usize],
            labels: FxHashMap::default(),
            num_edges: 0,
        }
    }
}

impl GraphVertexEditing for LabelledGraph {
    fn create_vertex(&mut self) -> Node {
        let u = self.number_of_nodes();
        self.out_nbs.push(Vec::new());
        u
    }
}

impl GraphEdgeEditing for LabelledGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            trace!(u, v, "rejecting edge with unknown endpoint");
            return false;
        }

        self.out_nbs[u as usize].push(v);
        self.num_edges += 1;
        true
    }
}

impl GraphLabelEditing for LabelledGraph {
    fn try_add_label(&mut self, u: Node, label: &str) -> bool {
        if !self.has_vertex(u) {
            trace!(u, label, "rejecting label for unknown vertex");
            return false;
        }

        // only allocate the key for labels we have not seen before
        match self.labels.get_mut(label) {
            Some(vertices) => {
                vertices.insert(u);
            }
            None => {
                self.labels
                    .insert(label.to_owned(), std::iter::once(u).collect());
            }
        }
        true
    }

    fn try_remove_label(&mut self, u: Node, label: &str) -> bool {
        if !self.has_vertex(u) {
            trace!(u, label, "rejecting label removal for unknown vertex");
            return false;
        }

        if let Some(vertices) = self.labels.get_mut(label) {
            vertices.remove(&u);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn graph_new() {
        for n in 0..20 {
            let graph = LabelledGraph::new(n);

            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_labels(), 0);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert_eq!(graph.is_empty(), n == 0);
        }
    }

    #[test]
    fn create_vertex() {
        let mut graph = LabelledGraph::default();
        for expected in 0..10 {
            assert_eq!(graph.create_vertex(), expected);
            assert_eq!(graph.number_of_nodes(), expected + 1);
            assert_eq!(graph.degree_of(expected), 0);
        }
    }

    #[test]
    fn edges_keep_order_and_duplicates() {
        let mut graph = LabelledGraph::new(3);

        assert!(graph.try_add_edge(0, 2));
        assert!(graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(0, 2));
        assert!(graph.try_add_edge(1, 1));

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2, 1, 2]);
        assert_eq!(graph.as_neighbors_slice(1), &[1]);
        assert_eq!(graph.degree_of(0), 3);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(1, 1));
        assert_eq!(
            graph.ordered_edges().collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(0, 2), Edge(1, 1)]
        );
    }

    #[test]
    fn parallel_edges_are_counted_in_u64() {
        let mut graph = LabelledGraph::new(2);
        for _ in 0..1000 {
            assert!(graph.try_add_edge(0, 1));
        }

        let edges: NumEdges = graph.number_of_edges();
        let degree: NumEdges = graph.degree_of(0);
        assert_eq!(edges, 1000);
        assert_eq!(degree, 1000);
    }

    #[test]
    fn edges_out_of_range() {
        let mut graph = LabelledGraph::from_edges(3, [(0, 1), (1, 2)]);

        assert!(!graph.try_add_edge(3, 0));
        assert!(!graph.try_add_edge(0, 3));
        assert!(!graph.try_add_edge(Node::MAX, Node::MAX));

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    #[should_panic]
    fn add_edge_panics_out_of_range() {
        let mut graph = LabelledGraph::new(2);
        graph.add_edge(0, 2);
    }

    #[test]
    fn labels() {
        let mut graph = LabelledGraph::new(4);

        assert!(graph.vertices_with("a").is_none());
        assert!(graph.try_add_label(1, "a"));
        assert!(graph.try_add_label(1, "a"));
        assert!(graph.try_add_label(3, "a"));
        assert!(graph.try_add_label(1, "b"));

        assert_eq!(graph.vertices_with("a").unwrap().len(), 2);
        assert!(graph.has_label(1, "a"));
        assert!(!graph.has_label(0, "a"));
        assert!(!graph.has_label(1, "A"));
        assert_eq!(graph.labels_of(1), vec!["a", "b"]);
        assert_eq!(graph.number_of_labels(), 2);

        assert!(graph.try_remove_label(1, "a"));
        assert!(!graph.has_label(1, "a"));
        assert!(graph.has_label(3, "a"));

        // removing absent memberships or unknown labels succeeds without effect
        assert!(graph.try_remove_label(1, "a"));
        assert!(graph.try_remove_label(0, "unknown"));
        assert!(graph.vertices_with("unknown").is_none());
    }

    #[test]
    fn labels_out_of_range() {
        let mut graph = LabelledGraph::new(2);

        assert!(!graph.try_add_label(2, "a"));
        assert!(graph.vertices_with("a").is_none());
        assert!(!graph.try_remove_label(2, "a"));
    }

    #[test]
    fn emptied_label_stays_known() {
        let mut graph = LabelledGraph::new(1);

        assert!(graph.try_add_label(0, "a"));
        assert!(graph.try_remove_label(0, "a"));
        assert!(graph.vertices_with("a").is_some_and(|vs| vs.is_empty()));
        assert_eq!(graph.label_index().len(), 1);
    }
}
