//! Independent minimum spanning forest oracle.
//!
//! Uses Prim's algorithm over a dense adjacency matrix, restarted from every
//! unvisited node so disconnected graphs yield a forest. Sharing no code with
//! the Kruskal solvers makes agreement on total weight meaningful.

use crate::Edge;

/// Result of the Prim oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: i128,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of trees in the forest, isolated nodes included.
    pub component_count: usize,
}

/// Computes the minimum spanning forest of `edges` over `node_count` nodes.
///
/// Self-loops are ignored and parallel edges collapse to the lightest one.
pub(super) fn prim_forest(node_count: usize, edges: &[Edge]) -> OracleResult {
    let mut adjacency: Vec<Vec<Option<i64>>> = vec![vec![None; node_count]; node_count];
    for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
        for (a, b) in [(edge.u(), edge.v()), (edge.v(), edge.u())] {
            let slot = &mut adjacency[a][b];
            *slot = Some(slot.map_or(edge.weight(), |w| w.min(edge.weight())));
        }
    }

    let mut visited = vec![false; node_count];
    let mut best: Vec<Option<i64>> = vec![None; node_count];
    let mut result = OracleResult {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        result.component_count += 1;
        visited[start] = true;
        relax(&adjacency[start], &visited, &mut best);

        while let Some(next) = cheapest_frontier(&visited, &best) {
            let weight = best[next].unwrap_or_default();
            visited[next] = true;
            result.total_weight += i128::from(weight);
            result.edge_count += 1;
            relax(&adjacency[next], &visited, &mut best);
        }
    }

    result
}

fn relax(row: &[Option<i64>], visited: &[bool], best: &mut [Option<i64>]) {
    for (node, weight) in row.iter().enumerate() {
        let Some(weight) = weight else {
            continue;
        };
        if visited[node] {
            continue;
        }
        if best[node].is_none_or(|current| *weight < current) {
            best[node] = Some(*weight);
        }
    }
}

fn cheapest_frontier(visited: &[bool], best: &[Option<i64>]) -> Option<usize> {
    best.iter()
        .enumerate()
        .filter(|(node, _)| !visited[*node])
        .filter_map(|(node, weight)| weight.map(|w| (w, node)))
        .min()
        .map(|(_, node)| node)
}
