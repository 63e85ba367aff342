//! Sequential Kruskal minimum spanning tree construction.
//!
//! Edges are sorted by weight and greedily accepted whenever they join two
//! different components of a [`DisjointSetUnion`]. The scan stops as soon as
//! `node_count - 1` edges have been accepted.

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{MstError, Result},
    union_find::DisjointSetUnion,
};

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// The input does not need to be sorted and is left untouched; the solver
/// sorts a private copy. Edges with equal weight keep their input order.
/// When the graph restricted to `node_count` nodes is connected the result is
/// a minimum spanning tree with exactly `node_count - 1` edges; otherwise it
/// is a minimum spanning forest with fewer edges.
///
/// # Errors
///
/// Returns an error when:
/// - `node_count == 0` ([`MstError::EmptyGraph`])
/// - an edge references a node id `>= node_count`
///   ([`MstError::InvalidNodeId`])
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, solve_sequential, total_weight};
///
/// let edges = [
///     Edge::new(0, 1, 1),
///     Edge::new(1, 2, 2),
///     Edge::new(2, 3, 3),
///     Edge::new(0, 3, 10),
///     Edge::new(0, 2, 5),
/// ];
/// let tree = solve_sequential(&edges, 4)?;
/// assert_eq!(tree.len(), 3);
/// assert_eq!(total_weight(&tree), 6);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[instrument(
    name = "mst.sequential",
    err,
    skip(edges),
    fields(node_count = node_count, edges = edges.len()),
)]
pub fn solve_sequential(edges: &[Edge], node_count: usize) -> Result<Vec<Edge>> {
    validate_edges(edges, node_count)?;
    let forest = assemble_forest(edges.to_vec(), node_count);
    debug!(accepted = forest.len(), "sequential solve completed");
    Ok(forest)
}

/// Rejects an empty node range and any edge endpoint outside it.
pub(crate) fn validate_edges(edges: &[Edge], node_count: usize) -> Result<()> {
    if node_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    for edge in edges {
        for node in [edge.u(), edge.v()] {
            if node >= node_count {
                return Err(MstError::InvalidNodeId { node, node_count });
            }
        }
    }
    Ok(())
}

/// Kruskal assembly over edges whose endpoints are known to be in range.
pub(crate) fn assemble_forest(mut edges: Vec<Edge>, node_count: usize) -> Vec<Edge> {
    let target = node_count.saturating_sub(1);
    let mut forest = Vec::with_capacity(target.min(edges.len()));
    if target == 0 {
        return forest;
    }

    edges.sort_by_key(Edge::weight);

    let mut sets = DisjointSetUnion::new(node_count);
    for edge in edges {
        if sets.union_unchecked(edge.u(), edge.v()) {
            forest.push(edge);
            if forest.len() == target {
                break;
            }
        }
    }
    forest
}
