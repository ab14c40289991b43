//! SocialAttributeNetwork: the vertex table and adjacency lists

use super::edge::{WeightedEdge, DEFAULT_WEIGHT};
use super::node::SanNode;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when mutating or querying the graph
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Vertex index {index} out of range (vertex count {count})")]
    VertexOutOfRange { index: usize, count: usize },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// A graph of uniquely identified vertices joined by weighted edges
///
/// Vertices are addressed by the index returned from [`add_vertex`]. Indices
/// are assigned in insertion order and are never reused. Edges are stored as
/// outgoing records per vertex; an undirected edge is two mirrored records.
///
/// [`add_vertex`]: SocialAttributeNetwork::add_vertex
#[derive(Debug, Clone, Default)]
pub struct SocialAttributeNetwork {
    /// Vertex table, position = index
    vertices: Vec<SanNode>,
    /// Value-equality lookup into `vertices`
    index: HashMap<SanNode, usize>,
    /// Outgoing edges, aligned with `vertices`
    edges: Vec<Vec<WeightedEdge>>,
}

impl SocialAttributeNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, or return the index of the equal vertex already present
    pub fn add_vertex(&mut self, node: SanNode) -> usize {
        if let Some(&existing) = self.index.get(&node) {
            return existing;
        }
        let index = self.vertices.len();
        self.index.insert(node.clone(), index);
        self.vertices.push(node);
        self.edges.push(Vec::new());
        index
    }

    /// Add an undirected edge of weight 1.0
    pub fn add_unit_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT, false)
    }

    /// Add an edge `from -> to`, mirrored as `to -> from` unless `directed`
    ///
    /// Parallel edges and self-loops are stored as given.
    pub fn add_weighted_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: f64,
        directed: bool,
    ) -> GraphResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.edges[from].push(WeightedEdge::new(to, weight));
        if !directed {
            self.edges[to].push(WeightedEdge::new(from, weight));
        }
        Ok(())
    }

    /// Get the vertex at an index
    pub fn vertex_at(&self, index: usize) -> Option<&SanNode> {
        self.vertices.get(index)
    }

    /// Find the index of a vertex equal to `node`
    pub fn index_of(&self, node: &SanNode) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Outgoing edge records of a vertex, in insertion order
    ///
    /// Empty for an out-of-range index.
    pub fn edges_from(&self, index: usize) -> &[WeightedEdge] {
        self.edges.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Targets of the outgoing edges of a vertex, duplicates included
    pub fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges_from(index).iter().map(|e| e.to)
    }

    /// Number of outgoing edge records (parallel edges each count)
    pub fn degree(&self, index: usize) -> usize {
        self.edges_from(index).len()
    }

    /// Whether an outgoing record `from -> to` exists
    pub fn edge_exists(&self, from: usize, to: usize) -> bool {
        self.edges_from(from).iter().any(|e| e.to == to)
    }

    /// Weight of the first `from -> to` record
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.edges_from(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of outgoing edge records across all vertices
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// All vertices with their indices, in index order
    pub fn vertices(&self) -> impl Iterator<Item = (usize, &SanNode)> {
        self.vertices.iter().enumerate()
    }

    /// Indices of all social vertices, ascending
    pub fn social_indices(&self) -> Vec<usize> {
        self.vertices()
            .filter(|(_, node)| node.is_social())
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of all attribute vertices, ascending
    pub fn attribute_indices(&self) -> Vec<usize> {
        self.vertices()
            .filter(|(_, node)| node.is_attribute())
            .map(|(i, _)| i)
            .collect()
    }

    fn check_index(&self, index: usize) -> GraphResult<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }
}
