//! Strategy builders for MST property-based tests.
//!
//! Each generator builds a list of [`Edge`] values from a seeded
//! [`SmallRng`] so that failing cases can be replayed from the seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 64;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 32;
/// Upper bound for "unique" weights.
const WIDE_WEIGHT: i64 = 1_000_000;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            let weights = |r: &mut SmallRng| r.gen_range(1..=WIDE_WEIGHT);
            random_graph(rng, MAX_NODES, (0.2, 0.6), distribution, weights)
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            let weights = move |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];
            random_graph(rng, MAX_NODES, (0.3, 0.7), distribution, weights)
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let weights = |r: &mut SmallRng| r.gen_range(-50..=50);
            random_graph(rng, DENSE_MAX_NODES, (0.7, 0.95), distribution, weights)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered pair with a sampled probability, orienting the pair
/// randomly so both `(u, v)` and `(v, u)` forms appear.
fn random_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(&mut *rng);
                edges.push(oriented(rng, i, j, w));
            }
        }
    }

    if edges.is_empty() {
        let w = weight(&mut *rng);
        edges.push(Edge::new(0, 1, w));
    }

    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Builds a random spanning path (guaranteeing connectivity) and appends a
/// few random extra edges, including occasional self-loops and duplicates.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut perm: Vec<usize> = (0..node_count).collect();
    shuffle(&mut perm, rng);

    let mut edges: Vec<Edge> = perm
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(1..=100)))
        .collect();

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let u = rng.gen_range(0..node_count);
        let v = rng.gen_range(0..node_count);
        edges.push(Edge::new(u, v, rng.gen_range(1..=100)));
    }

    // Interleave the path with the extras so partitions see mixed content.
    shuffle(&mut edges, rng);

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Generates 2-5 components of 3-12 nodes each with no cross-component
/// edges, plus an occasional isolated node.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(3..=12);
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let start_len = edges.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    let w = rng.gen_range(1..=100);
                    edges.push(oriented(rng, offset + i, offset + j, w));
                }
            }
        }
        if edges.len() == start_len {
            edges.push(Edge::new(offset, offset + 1, rng.gen_range(1..=100)));
        }
        offset += size;
    }

    let isolated = usize::from(rng.gen_bool(0.5));

    MstFixture {
        node_count: offset + isolated,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

fn oriented(rng: &mut SmallRng, a: usize, b: usize, weight: i64) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Biased towards ManyIdentical, the distribution most likely to expose
// tie-handling differences between partitions.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
