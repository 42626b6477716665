use std::fmt::Display;

use itertools::Itertools;

use crate::*;

/// A directed path, stored as the sequence of visited vertices.
///
/// The first vertex is the source, the last one the destination, and `length`
/// is the number of edges, i.e. `vertices.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Number of edges on the path
    pub length: NumNodes,
    /// Vertices from source to destination (both inclusive)
    pub vertices: Vec<Node>,
}

impl Path {
    /// Creates a path from a non-empty vertex sequence
    /// ** Panics if `vertices` is empty **
    pub fn new(vertices: Vec<Node>) -> Self {
        assert!(!vertices.is_empty(), "a path contains at least its source");
        Self {
            length: (vertices.len() - 1) as NumNodes,
            vertices,
        }
    }

    /// Zero-length path consisting of a single vertex
    pub fn trivial(u: Node) -> Self {
        Self::new(vec![u])
    }

    /// First vertex of the path
    pub fn source(&self) -> Node {
        self.vertices[0]
    }

    /// Last vertex of the path
    pub fn destination(&self) -> Node {
        self.vertices[self.vertices.len() - 1]
    }

    /// Returns an iterator over the edges traversed by the path, in order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.iter().tuple_windows().map(|(&u, &v)| Edge(u, v))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.length, self.vertices.iter().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn new_path() {
        let path = Path::new(vec![0, 1, 3]);
        assert_eq!(path.length, 2);
        assert_eq!(path.source(), 0);
        assert_eq!(path.destination(), 3);
        assert_eq!(path.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 3)]);
        assert_eq!(path.to_string(), "2: 0 -> 1 -> 3");
    }

    #[test]
    fn trivial_path() {
        let path = Path::trivial(4);
        assert_eq!(path.length, 0);
        assert_eq!(path.vertices, vec![4]);
        assert_eq!(path.source(), path.destination());
        assert_eq!(path.edges().count(), 0);
    }

    #[test]
    #[should_panic]
    fn empty_path() {
        Path::new(Vec::new());
    }
}
