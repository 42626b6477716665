use std::collections::VecDeque;

use crate::path::Path;

use super::*;

/// Computes a shortest directed path from `src` to `dst` such that every vertex on the path,
/// including both endpoints, holds `label`.
///
/// Returns `None` if
/// - `src` or `dst` is not a vertex of `graph`,
/// - `label` was never added to any vertex,
/// - `src` or `dst` does not hold `label` (this includes `src == dst`),
/// - every path from `src` to `dst` leaves the vertices holding `label`.
///
/// Vertices without `label` are invisible to the search. The search stops as soon as `dst` is
/// discovered, so only vertices closer to `src` than `dst` are explored.
///
/// `state` has to be fresh; it is **not** reset afterwards. Wrap it into a [`ResetGuard`]
/// to do so.
///
/// # Examples
/// ```
/// use lgraph_store::{prelude::*, algo::*};
///
/// let mut graph = LabelledGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
/// for u in [0, 1, 2] {
///     graph.try_add_label(u, "a");
/// }
/// graph.try_add_label(1, "b");
///
/// let mut state = SparseState::default();
/// let path = labelled_shortest_path(&graph, &mut state, 0, 2, "a").unwrap();
/// assert_eq!(path.vertices, vec![0, 2]);
///
/// state.reset();
/// assert!(labelled_shortest_path(&graph, &mut state, 0, 2, "b").is_none());
/// ```
pub fn labelled_shortest_path<G, S>(
    graph: &G,
    state: &mut S,
    src: Node,
    dst: Node,
    label: &str,
) -> Option<Path>
where
    G: AdjacencyList + GraphLabels,
    S: TraversalState + ?Sized,
{
    if !graph.has_vertex(src) || !graph.has_vertex(dst) {
        return None;
    }

    let valid = graph.vertices_with(label)?;
    if !valid.contains(&src) || !valid.contains(&dst) {
        return None;
    }

    state.set_distance(src, 0);

    if src != dst && !search_until(graph, state, valid, src, dst) {
        return None;
    }

    Some(state.find_path(src, dst))
}

/// Runs the BFS from `src` restricted to `valid` and returns *true* once `dst` is discovered.
fn search_until<G, S>(graph: &G, state: &mut S, valid: &VertexSet, src: Node, dst: Node) -> bool
where
    G: AdjacencyList,
    S: TraversalState + ?Sized,
{
    let mut queue = VecDeque::from([src]);

    while let Some(u) = queue.pop_front() {
        let next = state.distance(u) + 1;

        for v in graph.neighbors_of(u) {
            if !valid.contains(&v) {
                continue;
            }

            if state.distance(v) > next {
                state.set_distance(v, next);
                state.set_parent(v, u);
                queue.push_back(v);
            }

            // BFS discovers vertices in order of their distance, so the first discovery is final
            if v == dst {
                return true;
            }
        }
    }

    false
}
