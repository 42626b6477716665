use std::{
    fmt::{Debug, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};

use fxhash::FxHashMap;

use crate::{StoreError, path::Path, testing::test_traversal_state};

use super::*;

/// Per-query scratch space of a breadth-first search.
///
/// For every vertex discovered during a query, the state records the hop distance from the
/// source and the vertex it was discovered from. Vertices that were not touched since the last
/// [`TraversalState::reset`] report [`INFINITE_DISTANCE`].
///
/// A state belongs to exactly one query at a time and must be reset before it is reused.
pub trait TraversalState: Debug {
    /// Returns the recorded distance of `u` or [`INFINITE_DISTANCE`] if none was recorded
    fn distance(&self, u: Node) -> Distance;

    /// Records the distance of `u`
    fn set_distance(&mut self, u: Node, distance: Distance);

    /// Returns the recorded parent of `u`.
    /// The value for vertices without a recorded parent is implementation defined.
    fn parent(&self, u: Node) -> Node;

    /// Records the parent of `u`
    fn set_parent(&mut self, u: Node, parent: Node);

    /// Forgets everything recorded since the last reset
    fn reset(&mut self);

    /// Informs the state that the graph has grown by one vertex
    fn on_vertex_created(&mut self) {}

    /// Number of records made since the last reset
    fn touched(&self) -> usize;

    /// Reconstructs the path from `src` to `dst` by walking parent pointers backwards.
    ///
    /// # Warning
    /// The parent chain starting at `dst` has to end in `src`, i.e. `dst` must have been
    /// discovered by a search started in `src`. Otherwise the result is meaningless and the
    /// walk might not terminate.
    fn find_path(&self, src: Node, dst: Node) -> Path {
        let mut vertices = vec![dst];
        let mut u = dst;
        while u != src {
            u = self.parent(u);
            vertices.push(u);
            debug_assert!(vertices.len() <= self.touched() + 1, "broken parent chain");
        }

        vertices.reverse();
        Path::new(vertices)
    }
}

/// Memory-optimized [`TraversalState`] that stores distances and parents in hash maps.
///
/// Memory is only allocated for vertices touched by the current query, which makes this the
/// better choice for huge graphs where queries only explore a small fraction of vertices.
/// Vertices without a recorded parent report [`INVALID_NODE`].
#[derive(Debug, Clone, Default)]
pub struct SparseState {
    distances: FxHashMap<Node, Distance>,
    parents: FxHashMap<Node, Node>,
}

impl TraversalState for SparseState {
    fn distance(&self, u: Node) -> Distance {
        self.distances.get(&u).copied().unwrap_or(INFINITE_DISTANCE)
    }

    fn set_distance(&mut self, u: Node, distance: Distance) {
        self.distances.insert(u, distance);
    }

    fn parent(&self, u: Node) -> Node {
        self.parents.get(&u).copied().unwrap_or(INVALID_NODE)
    }

    fn set_parent(&mut self, u: Node, parent: Node) {
        self.parents.insert(u, parent);
    }

    fn reset(&mut self) {
        self.distances.clear();
        self.parents.clear();
    }

    fn touched(&self) -> usize {
        self.distances.len().max(self.parents.len())
    }
}

/// Performance-optimized [`TraversalState`] that stores distances and parents in arrays
/// indexed by vertex.
///
/// Accesses are plain array lookups, at the cost of `O(n)` memory for the whole lifetime of
/// the state. Every write is logged, so that [`TraversalState::reset`] only restores the
/// entries written since the last reset. Vertices without a recorded parent report `0`.
///
/// The arrays grow through [`TraversalState::on_vertex_created`]; accessing a vertex the
/// state was never told about panics.
#[derive(Debug, Clone, Default)]
pub struct DenseState {
    distances: Vec<Distance>,
    parents: Vec<Node>,
    affected: Vec<Node>,
}

impl DenseState {
    /// Creates a state for a graph with `n` vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            distances: vec![INFINITE_DISTANCE; n as usize],
            parents: vec![0; n as usize],
            affected: Vec::new(),
        }
    }

    /// Number of vertices the state can hold
    pub fn capacity(&self) -> NumNodes {
        self.distances.len() as NumNodes
    }
}

impl TraversalState for DenseState {
    fn distance(&self, u: Node) -> Distance {
        self.distances[u as usize]
    }

    fn set_distance(&mut self, u: Node, distance: Distance) {
        self.distances[u as usize] = distance;
        self.affected.push(u);
    }

    fn parent(&self, u: Node) -> Node {
        self.parents[u as usize]
    }

    fn set_parent(&mut self, u: Node, parent: Node) {
        self.parents[u as usize] = parent;
        self.affected.push(u);
    }

    fn reset(&mut self) {
        for u in self.affected.drain(..) {
            self.distances[u as usize] = INFINITE_DISTANCE;
            self.parents[u as usize] = 0;
        }
    }

    fn on_vertex_created(&mut self) {
        self.distances.push(INFINITE_DISTANCE);
        self.parents.push(0);
    }

    fn touched(&self) -> usize {
        self.affected.len()
    }
}

/// Resets the wrapped [`TraversalState`] when dropped, so that no query can leave records
/// behind, no matter how it is left.
pub struct ResetGuard<'a, S>
where
    S: TraversalState + ?Sized,
{
    state: &'a mut S,
}

impl<'a, S> ResetGuard<'a, S>
where
    S: TraversalState + ?Sized,
{
    /// Wraps `state`
    pub fn new(state: &'a mut S) -> Self {
        Self { state }
    }
}

impl<S> Deref for ResetGuard<'_, S>
where
    S: TraversalState + ?Sized,
{
    type Target = S;

    fn deref(&self) -> &S {
        self.state
    }
}

impl<S> DerefMut for ResetGuard<'_, S>
where
    S: TraversalState + ?Sized,
{
    fn deref_mut(&mut self) -> &mut S {
        self.state
    }
}

impl<S> Drop for ResetGuard<'_, S>
where
    S: TraversalState + ?Sized,
{
    fn drop(&mut self) {
        self.state.reset();
    }
}

/// Selects the [`TraversalState`] implementation used by a store.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`SparseState`]
    MemoryOptimized,
    /// [`DenseState`]
    #[default]
    PerformanceOptimized,
}

impl Strategy {
    /// Creates an empty state of the selected kind for a graph with `n` vertices
    pub fn state(self, n: NumNodes) -> Box<dyn TraversalState> {
        match self {
            Strategy::MemoryOptimized => Box::new(SparseState::default()),
            Strategy::PerformanceOptimized => Box::new(DenseState::new(n)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::MemoryOptimized => write!(f, "memory-optimized"),
            Strategy::PerformanceOptimized => write!(f, "performance-optimized"),
        }
    }
}

impl FromStr for Strategy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "memory-optimized" | "sparse" => Ok(Strategy::MemoryOptimized),
            "performance" | "performance-optimized" | "dense" => {
                Ok(Strategy::PerformanceOptimized)
            }
            _ => Err(StoreError::InvalidStrategy(s.to_owned())),
        }
    }
}

test_traversal_state!(sparse_state, SparseState);
test_traversal_state!(dense_state, DenseState);
