//! Link-prediction scores over the social-attribute network

mod adamic_adar;

pub use adamic_adar::{adamic_adar, ScoreError, ScoreResult};
