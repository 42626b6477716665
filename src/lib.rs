/*!
`lgraph_store` is an embeddable in-memory store for **directed**, **unweighted** graphs whose
vertices carry **string labels**. Its central query finds a shortest directed path between two
vertices such that *every* vertex on the path holds a given label.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of vertices created so far.
Ids are assigned consecutively and never reused. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
Parallel edges and self-loops are allowed.

A **label** is an opaque, case-sensitive string. Each vertex holds a set of labels; the store only
indexes the direction `label -> vertices`.

# Design

- [`repr::LabelledGraph`] is pure storage: adjacency arrays plus the label index.
- [`algo::TraversalState`] is the scratch space of a single breadth-first search. It comes in a
  memory-optimized ([`algo::SparseState`]) and a performance-optimized ([`algo::DenseState`]) flavor,
  chosen once per store via [`algo::Strategy`].
- [`GraphStore`] ties both together, validates input and resets the traversal state after every query.

Mutations report invalid vertex ids by returning `false`, queries by returning `None`. Only the
bulk constructor [`GraphStore::from_parts`] returns an error, as an inconsistent declaration is a
caller bug rather than a runtime condition.

A store is single-threaded: callers needing concurrent access have to synchronize externally or
use one store per thread.

# Usage

```rust
use lgraph_store::prelude::*;

let mut store = GraphStore::from_parts(
    4,
    [("1", vec![0, 1, 3]), ("2", vec![0, 2, 3]), ("3", vec![0, 3])],
    [(0, 1), (0, 2), (1, 3), (2, 3)],
    Strategy::PerformanceOptimized,
)
.unwrap();

assert_eq!(store.shortest_path(0, 3, "1").unwrap().vertices, vec![0, 1, 3]);
assert!(store.shortest_path(0, 3, "3").is_none());

store.add_label(2, "3");
assert_eq!(store.shortest_path(0, 3, "3").unwrap().length, 2);
```

The crate logs through [`tracing`]; install a subscriber to see construction and query events.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod label;
pub mod node;
pub mod ops;
pub mod path;
pub mod repr;
pub mod store;
pub(crate) mod testing;

pub use edge::*;
pub use error::StoreError;
pub use label::*;
pub use node::*;
pub use path::Path;
pub use store::{GraphStore, GraphStoreBuilder};

/// `lgraph_store::prelude` includes the store, its configuration, nodes, edges, paths, and all basic graph operation traits.
pub mod prelude {
    pub use super::{
        GraphStore, GraphStoreBuilder, Path, StoreError,
        algo::Strategy,
        edge::*,
        label::*,
        node::*,
        ops::*,
        repr::*,
    };
}
