//! egosan: Social-Attribute Networks from ego-network datasets
//!
//! Builds one graph out of a SNAP-style ego-network directory, mixing people
//! and categorical attribute values, and scores how strongly a person is tied
//! to an attribute through their friends.
//!
//! # Core Concepts
//!
//! - **Social nodes**: people, identified by name
//! - **Attribute nodes**: one (name, value) feature, shared by everyone who has it
//! - **Edges**: weighted outgoing records; an undirected edge is stored both ways
//! - **Adamic-Adar**: Σ 1/ln(deg(w)) over social neighbors shared by a person
//!   and an attribute
//!
//! # Example
//!
//! ```no_run
//! use egosan::{load_ego_network, SanNode};
//!
//! let graph = load_ego_network("data/facebook", false)?;
//! let person = graph.index_of(&SanNode::social("1")).unwrap();
//! let gender = graph.index_of(&SanNode::attribute("gender", "anonymized feature 77")).unwrap();
//! println!("{}", graph.adamic_adar(person, gender)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod graph;
pub mod loader;
pub mod score;

pub use graph::{
    AttributeNode, GraphError, GraphResult, SanNode, SocialAttributeNetwork, WeightedEdge,
    DEFAULT_WEIGHT,
};
pub use loader::{load_ego_network, EgoNetworkLoader, LoadError, LoadOptions, LoadResult};
pub use score::{adamic_adar, ScoreError, ScoreResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
