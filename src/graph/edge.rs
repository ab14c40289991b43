//! Weighted outgoing edge records

use serde::{Deserialize, Serialize};

/// Weight used when the caller does not supply one
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An outgoing edge stored in the adjacency list of its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Index of the target vertex
    pub to: usize,
    /// Edge weight (feature edges carry the raw feature value)
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(to: usize, weight: f64) -> Self {
        Self { to, weight }
    }

    /// Create an edge with the default weight
    pub fn unit(to: usize) -> Self {
        Self::new(to, DEFAULT_WEIGHT)
    }
}
