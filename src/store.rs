/*!
# Graph Store

[`GraphStore`] is the facade of this crate. It owns a [`LabelledGraph`] together with the
[`TraversalState`] used by its queries, keeps the state in sync with the number of vertices
and guarantees that every query starts from a clean state.

A store is not meant to be shared between threads without external synchronization: the
traversal state is scratch space of the single query running at a time.
*/

use tracing::{debug, trace, warn};

use crate::{algo::*, ops::*, repr::*, *};

/// An in-memory directed graph with labelled vertices that answers label-constrained
/// shortest path queries.
///
/// # Examples
/// ```
/// use lgraph_store::prelude::*;
///
/// let mut store = GraphStore::new();
/// let u = store.create_vertex();
/// let v = store.create_vertex();
///
/// assert!(store.create_edge(u, v));
/// assert!(store.add_label(u, "red"));
/// assert!(store.add_label(v, "red"));
///
/// let path = store.shortest_path(u, v, "red").unwrap();
/// assert_eq!(path.length, 1);
/// assert_eq!(path.vertices, vec![u, v]);
///
/// assert!(store.shortest_path(u, v, "blue").is_none());
/// ```
#[derive(Debug)]
pub struct GraphStore {
    graph: LabelledGraph,
    state: Box<dyn TraversalState>,
    strategy: Strategy,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Creates an empty store using the default [`Strategy`]
    pub fn new() -> Self {
        Self::with_strategy(Strategy::default())
    }

    /// Creates an empty store using the given [`Strategy`] for all of its queries
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            graph: LabelledGraph::default(),
            state: strategy.state(0),
            strategy,
        }
    }

    /// Creates a store with `vertex_count` vertices `0..vertex_count`, then assigns the labels
    /// and finally inserts the edges in the given order.
    ///
    /// # Errors
    /// Fails if any label or edge references a vertex `>= vertex_count`.
    /// No store is created in that case.
    ///
    /// # Examples
    /// ```
    /// use lgraph_store::prelude::*;
    ///
    /// let store = GraphStore::from_parts(
    ///     3,
    ///     [("a", vec![0, 1, 2])],
    ///     [(0, 1), (1, 2)],
    ///     Strategy::MemoryOptimized,
    /// )
    /// .unwrap();
    /// assert_eq!(store.graph().number_of_edges(), 2);
    ///
    /// let err = GraphStore::from_parts(2, [("a", vec![2])], [(0, 1)], Strategy::default());
    /// assert!(matches!(err, Err(StoreError::LabelOutOfRange { vertex: 2, .. })));
    /// ```
    pub fn from_parts<L, V, E>(
        vertex_count: NumNodes,
        label_to_vertices: impl IntoIterator<Item = (L, V)>,
        edges: impl IntoIterator<Item = E>,
        strategy: Strategy,
    ) -> Result<Self, StoreError>
    where
        L: AsRef<str>,
        V: IntoIterator<Item = Node>,
        E: Into<Edge>,
    {
        let mut store = Self::with_strategy(strategy);
        for _ in 0..vertex_count {
            store.create_vertex();
        }

        for (label, vertices) in label_to_vertices {
            let label = label.as_ref();
            for vertex in vertices {
                if !store.add_label(vertex, label) {
                    warn!(label, vertex, vertex_count, "label references undeclared vertex");
                    return Err(StoreError::LabelOutOfRange {
                        label: label.to_owned(),
                        vertex,
                        vertex_count,
                    });
                }
            }
        }

        for edge in edges {
            let edge = edge.into();
            if !store.create_edge(edge.0, edge.1) {
                warn!(%edge, vertex_count, "edge references undeclared vertex");
                return Err(StoreError::EdgeOutOfRange { edge, vertex_count });
            }
        }

        debug!(
            vertices = store.graph.number_of_nodes(),
            edges = store.graph.number_of_edges(),
            labels = store.graph.number_of_labels(),
            %strategy,
            "graph store constructed"
        );
        Ok(store)
    }

    /// Returns a builder to configure a store step by step
    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::default()
    }

    /// Returns the strategy fixed at construction
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Read-only access to the underlying graph
    pub fn graph(&self) -> &LabelledGraph {
        &self.graph
    }

    /// Appends a new vertex and returns its id.
    /// Ids are assigned consecutively starting at `0`.
    pub fn create_vertex(&mut self) -> Node {
        let u = self.graph.create_vertex();
        self.state.on_vertex_created();
        trace!(u, "vertex created");
        u
    }

    /// Appends the directed edge `(src, dst)`.
    /// Parallel edges and self-loops are allowed.
    ///
    /// Returns *false* without changing the store if either vertex does not exist.
    pub fn create_edge(&mut self, src: Node, dst: Node) -> bool {
        self.graph.try_add_edge(src, dst)
    }

    /// Adds `label` to `vertex`, doing nothing if it already holds it.
    ///
    /// Returns *false* without changing the store if `vertex` does not exist.
    pub fn add_label(&mut self, vertex: Node, label: &str) -> bool {
        self.graph.try_add_label(vertex, label)
    }

    /// Removes `label` from `vertex`, doing nothing if it does not hold it.
    ///
    /// Returns *false* if `vertex` does not exist, and *true* otherwise.
    pub fn remove_label(&mut self, vertex: Node, label: &str) -> bool {
        self.graph.try_remove_label(vertex, label)
    }

    /// Computes a shortest directed path from `src` to `dst` on which every vertex holds
    /// `label`. See [`labelled_shortest_path`] for the cases in which `None` is returned.
    ///
    /// The traversal state is reset before this method returns, regardless of the outcome.
    pub fn shortest_path(&mut self, src: Node, dst: Node, label: &str) -> Option<Path> {
        let mut state = ResetGuard::new(self.state.as_mut());
        let path = labelled_shortest_path(&self.graph, &mut *state, src, dst, label);

        debug!(
            src,
            dst,
            label,
            length = path.as_ref().map(|p| p.length),
            touched = state.touched(),
            "shortest path query"
        );
        path
    }
}

/// Builder for [`GraphStore`], collecting vertices, labels and edges before validating them
/// all at once in [`GraphStoreBuilder::build`].
///
/// # Examples
/// ```
/// use lgraph_store::prelude::*;
///
/// let mut store = GraphStore::builder()
///     .strategy(Strategy::MemoryOptimized)
///     .vertices(3)
///     .label("a", [0, 2])
///     .edge(0, 1)
///     .edges([(1, 2), (0, 2)])
///     .build()
///     .unwrap();
///
/// assert_eq!(store.shortest_path(0, 2, "a").unwrap().vertices, vec![0, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphStoreBuilder {
    strategy: Strategy,
    vertex_count: NumNodes,
    labels: Vec<(Label, Vec<Node>)>,
    edges: Vec<Edge>,
}

impl GraphStoreBuilder {
    /// Sets the traversal strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of vertices
    pub fn vertices(mut self, n: NumNodes) -> Self {
        self.vertex_count = n;
        self
    }

    /// Assigns `label` to all given vertices
    pub fn label(
        mut self,
        label: impl Into<Label>,
        vertices: impl IntoIterator<Item = Node>,
    ) -> Self {
        self.labels.push((label.into(), vertices.into_iter().collect()));
        self
    }

    /// Adds the edge `(u, v)`
    pub fn edge(mut self, u: Node, v: Node) -> Self {
        self.edges.push(Edge(u, v));
        self
    }

    /// Adds all edges in the collection
    pub fn edges(mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Builds the store, see [`GraphStore::from_parts`]
    pub fn build(self) -> Result<GraphStore, StoreError> {
        GraphStore::from_parts(self.vertex_count, self.labels, self.edges, self.strategy)
    }
}
