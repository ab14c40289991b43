//! Randomized social-attribute networks for property checks

use egosan::{SanNode, SocialAttributeNetwork};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a network of `people` social and `attributes` attribute vertices
/// joined by `edges` random edges of mixed directedness
///
/// Social vertices take indices `0..people`, attributes follow.
pub fn random_network(
    seed: u64,
    people: usize,
    attributes: usize,
    edges: usize,
) -> SocialAttributeNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = SocialAttributeNetwork::new();
    for i in 0..people {
        graph.add_vertex(SanNode::social(i.to_string()));
    }
    for i in 0..attributes {
        graph.add_vertex(SanNode::attribute("feature", i.to_string()));
    }

    let count = people + attributes;
    for _ in 0..edges {
        let from = rng.gen_range(0..count);
        let to = rng.gen_range(0..count);
        let weight = rng.gen_range(1..4) as f64;
        let directed = rng.gen_bool(0.3);
        graph
            .add_weighted_edge(from, to, weight, directed)
            .expect("indices are in range");
    }
    graph
}
