//! Ego-network dataset loading
//!
//! Parses SNAP-style ego-network directories into a
//! [`SocialAttributeNetwork`](crate::graph::SocialAttributeNetwork).

mod ego;
mod options;
mod parse;

pub use ego::{load_ego_network, EgoNetworkLoader, LoadError, LoadResult};
pub use options::LoadOptions;
pub use parse::{
    parse_edge_line, parse_egofeat_line, parse_feat_line, parse_featname_line, parse_featnames,
    FeatureName,
};
