//! Weighted undirected edges consumed and produced by the solvers.

use std::fmt;

/// Identifier of a node in `[0, node_count)`.
pub type NodeId = usize;

/// Integer edge weight.
pub type Weight = i64;

/// A weighted undirected edge.
///
/// `(u, v)` and `(v, u)` describe the same connection; the solvers neither
/// canonicalise nor deduplicate them.
///
/// # Examples
/// ```
/// use kruskal_core::Edge;
///
/// let edge = Edge::new(0, 3, 7);
/// assert_eq!((edge.u(), edge.v(), edge.weight()), (0, 3, 7));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    u: NodeId,
    v: NodeId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `u` and `v`.
    #[must_use]
    pub const fn new(u: NodeId, v: NodeId, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> NodeId { self.u }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> NodeId { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((u, v, weight): (NodeId, NodeId, Weight)) -> Self {
        Self::new(u, v, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.weight)
    }
}

/// Sums the weights of `edges` without risk of overflow.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, total_weight};
///
/// let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, -1)];
/// assert_eq!(total_weight(&edges), 3);
/// ```
#[must_use]
pub fn total_weight(edges: &[Edge]) -> i128 {
    edges.iter().map(|edge| i128::from(edge.weight)).sum()
}
