/*!
# Node Representation

We choose `Node = u32` as almost all stores hold less than `2^32` vertices.
Ids are dense: the `i`-th created vertex has id `i`, and ids are never reused.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid, used as the "no parent" marker
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Hop distances are bounded by the number of nodes
pub type Distance = NumNodes;

/// Distance of a node that was not discovered (yet)
pub const INFINITE_DISTANCE: Distance = Distance::MAX;
