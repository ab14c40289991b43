//! Loader configuration

use serde::Deserialize;

/// Options controlling how ego-network files become edges
///
/// ```
/// use egosan::LoadOptions;
///
/// let options = LoadOptions::new().with_directed(true);
/// assert!(options.directed);
/// assert!(!options.mirror_attribute_edges);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Store friendship and star edges one-way instead of mirrored
    pub directed: bool,
    /// Store feature-membership edges mirrored instead of one-way
    ///
    /// With the default one-way edges an attribute vertex has no outgoing
    /// records, so its social neighbor set is empty.
    pub mirror_attribute_edges: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_mirrored_attribute_edges(mut self, mirror: bool) -> Self {
        self.mirror_attribute_edges = mirror;
        self
    }

    /// Directedness used for `.feat` and `.egofeat` edges
    pub(crate) fn attribute_edges_directed(&self) -> bool {
        !self.mirror_attribute_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoadOptions::default();
        assert!(!options.directed);
        assert!(!options.mirror_attribute_edges);
        assert!(options.attribute_edges_directed());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: LoadOptions =
            serde_json::from_str(r#"{ "mirror_attribute_edges": true }"#).unwrap();
        assert_eq!(options, LoadOptions::new().with_mirrored_attribute_edges(true));
        assert!(!options.attribute_edges_directed());
    }
}
