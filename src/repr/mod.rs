/*!
# Graph Representations

Currently there is a single representation, [`LabelledGraph`]: a directed multigraph stored as
adjacency arrays of outgoing neighbors, combined with a [`LabelIndex`](crate::label::LabelIndex)
from labels to the vertices holding them.
*/

use crate::{ops::*, *};

mod labelled;

pub use labelled::*;
