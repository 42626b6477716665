/*!
# Graph Algorithms

Label-constrained breadth-first search on top of a [`LabelledGraph`](crate::repr::LabelledGraph).

The search itself is stateless; the per-query scratch space (distance and parent per
discovered vertex) is provided by a [`TraversalState`]. Two interchangeable implementations
exist, selected via [`Strategy`]:
- [`SparseState`] only allocates for vertices touched by a query,
- [`DenseState`] keeps `O(n)` arrays around for branch-free access.

Both are reset after each query in time proportional to the number of touched vertices.
```rust
use lgraph_store::{prelude::*, algo::*};
```
*/

mod search;
mod state;

use crate::{ops::*, *};

pub use search::*;
pub use state::*;
