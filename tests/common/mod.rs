//! Common test utilities for ego-network integration tests
//!
//! Writes small datasets into temporary directories so the loader runs
//! against real files.

#![allow(dead_code)]

pub mod dataset;
pub mod random_graph;

pub use dataset::{EgoFiles, TestDataset};
pub use random_graph::random_network;
