//! Adamic-Adar score between a person and an attribute value

use crate::graph::{GraphError, SanNode, SocialAttributeNetwork};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur when scoring a vertex pair
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("Both endpoints are attribute nodes ({u}, {v})")]
    BothAttributes { u: usize, v: usize },

    #[error("Social-social scoring is not implemented ({u}, {v})")]
    SocialPairUnsupported { u: usize, v: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for scoring operations
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Adamic-Adar index between a social vertex and an attribute vertex
///
/// Formula: AA(u,v) = Σ 1/ln(deg(w)) for every distinct social vertex `w`
/// reachable by an outgoing edge from both `u` and `v`, where `deg` counts
/// outgoing edge records.
///
/// The pair may be given in either order. A common neighbor of degree 1
/// contributes `1/ln(1) = +inf`; the term is not clamped.
///
/// # Examples
/// ```
/// use egosan::{adamic_adar, SanNode, SocialAttributeNetwork};
///
/// let mut g = SocialAttributeNetwork::new();
/// let alice = g.add_vertex(SanNode::social("alice"));
/// let bob = g.add_vertex(SanNode::social("bob"));
/// let carol = g.add_vertex(SanNode::social("carol"));
/// let male = g.add_vertex(SanNode::attribute("gender", "male"));
/// g.add_unit_edge(alice, bob).unwrap();
/// g.add_unit_edge(alice, carol).unwrap();
/// g.add_unit_edge(bob, male).unwrap();
///
/// // bob is the only shared neighbor; deg(bob) = 2
/// let aa = adamic_adar(&g, alice, male).unwrap();
/// assert!((aa - 1.0 / 2f64.ln()).abs() < 1e-12);
/// assert_eq!(aa, adamic_adar(&g, male, alice).unwrap());
/// ```
pub fn adamic_adar(graph: &SocialAttributeNetwork, u: usize, v: usize) -> ScoreResult<f64> {
    let (social, attribute) = normalize_pair(graph, u, v)?;

    let social_neighbors = social_neighbor_set(graph, social);
    let attribute_neighbors = social_neighbor_set(graph, attribute);

    Ok(social_neighbors
        .intersection(&attribute_neighbors)
        .map(|&w| 1.0 / (graph.degree(w) as f64).ln())
        .sum())
}

/// Order a pair as (social, attribute), rejecting same-kind pairs
fn normalize_pair(
    graph: &SocialAttributeNetwork,
    u: usize,
    v: usize,
) -> ScoreResult<(usize, usize)> {
    let (u, v) = if vertex(graph, u)?.is_attribute() {
        (v, u)
    } else {
        (u, v)
    };
    if vertex(graph, u)?.is_attribute() {
        return Err(ScoreError::BothAttributes { u, v });
    }
    match vertex(graph, v)? {
        SanNode::Attribute(_) => Ok((u, v)),
        SanNode::Social(_) => Err(ScoreError::SocialPairUnsupported { u, v }),
    }
}

fn vertex(graph: &SocialAttributeNetwork, index: usize) -> ScoreResult<&SanNode> {
    graph.vertex_at(index).ok_or(ScoreError::Graph(GraphError::VertexOutOfRange {
        index,
        count: graph.vertex_count(),
    }))
}

/// Distinct out-neighbors of `index` that are social vertices
fn social_neighbor_set(graph: &SocialAttributeNetwork, index: usize) -> BTreeSet<usize> {
    graph
        .neighbor_indices(index)
        .filter(|&w| graph.vertex_at(w).is_some_and(SanNode::is_social))
        .collect()
}

impl SocialAttributeNetwork {
    /// Adamic-Adar index between a social vertex and an attribute vertex
    ///
    /// See [`adamic_adar`].
    pub fn adamic_adar(&self, u: usize, v: usize) -> ScoreResult<f64> {
        adamic_adar(self, u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Person `p` and attribute `a` share friends `f1` (deg 3) and `f2` (deg 4)
    fn shared_friends() -> (SocialAttributeNetwork, usize, usize) {
        let mut g = SocialAttributeNetwork::new();
        let p = g.add_vertex(SanNode::social("p"));
        let f1 = g.add_vertex(SanNode::social("f1"));
        let f2 = g.add_vertex(SanNode::social("f2"));
        let x = g.add_vertex(SanNode::social("x"));
        let a = g.add_vertex(SanNode::attribute("gender", "77"));

        g.add_unit_edge(p, f1).unwrap();
        g.add_unit_edge(p, f2).unwrap();
        g.add_unit_edge(f1, a).unwrap();
        g.add_unit_edge(f2, a).unwrap();
        g.add_unit_edge(f1, x).unwrap();
        g.add_unit_edge(f2, x).unwrap();
        g.add_unit_edge(f2, x).unwrap();
        (g, p, a)
    }

    #[test]
    fn test_sum_over_common_neighbors() {
        let (g, p, a) = shared_friends();
        let expected = 1.0 / 3f64.ln() + 1.0 / 4f64.ln();
        assert!((adamic_adar(&g, p, a).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_argument_order_is_irrelevant() {
        let (g, p, a) = shared_friends();
        assert_eq!(adamic_adar(&g, p, a), adamic_adar(&g, a, p));
        assert_eq!(g.adamic_adar(a, p), adamic_adar(&g, p, a));
    }

    #[test]
    fn test_parallel_edges_collapse_in_neighbor_set() {
        let (mut g, p, a) = shared_friends();
        let before = adamic_adar(&g, p, a).unwrap();

        // Duplicate p -> f1 adds no new common neighbor but raises deg(p) only
        let f1 = g.index_of(&SanNode::social("f1")).unwrap();
        g.add_weighted_edge(p, f1, 1.0, true).unwrap();
        assert_eq!(adamic_adar(&g, p, a).unwrap(), before);
    }

    #[test]
    fn test_attribute_neighbors_are_ignored() {
        let mut g = SocialAttributeNetwork::new();
        let p = g.add_vertex(SanNode::social("p"));
        let a = g.add_vertex(SanNode::attribute("gender", "77"));
        let b = g.add_vertex(SanNode::attribute("locale", "1"));
        g.add_unit_edge(p, b).unwrap();
        g.add_unit_edge(a, b).unwrap();

        assert_eq!(adamic_adar(&g, p, a).unwrap(), 0.0);
    }

    #[test]
    fn test_no_common_neighbors_scores_zero() {
        let mut g = SocialAttributeNetwork::new();
        let p = g.add_vertex(SanNode::social("p"));
        let a = g.add_vertex(SanNode::attribute("gender", "77"));
        assert_eq!(adamic_adar(&g, p, a).unwrap(), 0.0);
    }

    #[test]
    fn test_degree_one_neighbor_is_infinite() {
        let mut g = SocialAttributeNetwork::new();
        let p = g.add_vertex(SanNode::social("p"));
        let w = g.add_vertex(SanNode::social("w"));
        let a = g.add_vertex(SanNode::attribute("gender", "77"));
        g.add_weighted_edge(p, w, 1.0, true).unwrap();
        g.add_weighted_edge(a, w, 1.0, true).unwrap();
        g.add_weighted_edge(w, p, 1.0, true).unwrap();

        let score = adamic_adar(&g, p, a).unwrap();
        assert!(score.is_infinite() && score > 0.0);
    }

    #[test]
    fn test_two_attributes_rejected() {
        let mut g = SocialAttributeNetwork::new();
        let a = g.add_vertex(SanNode::attribute("gender", "77"));
        let b = g.add_vertex(SanNode::attribute("gender", "78"));

        assert!(matches!(
            adamic_adar(&g, a, b),
            Err(ScoreError::BothAttributes { .. })
        ));
    }

    #[test]
    fn test_two_people_unsupported() {
        let (g, p, _) = shared_friends();
        let x = g.index_of(&SanNode::social("x")).unwrap();

        assert_eq!(
            adamic_adar(&g, p, x),
            Err(ScoreError::SocialPairUnsupported { u: p, v: x })
        );
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let (g, p, _) = shared_friends();
        assert!(matches!(
            adamic_adar(&g, p, 99),
            Err(ScoreError::Graph(GraphError::VertexOutOfRange { index: 99, .. }))
        ));
    }
}
