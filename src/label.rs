/*!
# Labels

A label is an opaque, case-sensitive string tag. Vertices may hold any number of distinct labels.
Only the direction `label -> vertices` is materialized; asking for the labels of a vertex
requires scanning the index.
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::Node;

/// Labels are owned strings; lookups accept `&str`
pub type Label = String;

/// Set of vertices holding a label
pub type VertexSet = FxHashSet<Node>;

/// Mapping from a label to the vertices currently holding it.
///
/// A label enters the index on its first `add` and stays there, possibly with an empty set,
/// after its last holder was removed.
pub type LabelIndex = FxHashMap<Label, VertexSet>;
