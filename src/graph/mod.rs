//! Core graph data structures

mod edge;
mod network;
mod node;


pub use edge::{WeightedEdge, DEFAULT_WEIGHT};
pub use network::{GraphError, GraphResult, SocialAttributeNetwork};
pub use node::{AttributeNode, SanNode};
