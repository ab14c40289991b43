//! Temporary ego-network dataset directories

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Contents of the four files describing one ego
///
/// A `None` field leaves that file out of the directory.
#[derive(Debug, Clone)]
pub struct EgoFiles {
    pub ego: String,
    pub edges: Option<String>,
    pub featnames: Option<String>,
    pub feat: Option<String>,
    pub egofeat: Option<String>,
}

impl EgoFiles {
    /// An ego with all four files present and empty
    pub fn new(ego: impl Into<String>) -> Self {
        Self {
            ego: ego.into(),
            edges: Some(String::new()),
            featnames: Some(String::new()),
            feat: Some(String::new()),
            egofeat: Some(String::new()),
        }
    }

    pub fn with_edges(mut self, contents: &str) -> Self {
        self.edges = Some(contents.to_string());
        self
    }

    pub fn with_featnames(mut self, contents: &str) -> Self {
        self.featnames = Some(contents.to_string());
        self
    }

    pub fn with_feat(mut self, contents: &str) -> Self {
        self.feat = Some(contents.to_string());
        self
    }

    pub fn with_egofeat(mut self, contents: &str) -> Self {
        self.egofeat = Some(contents.to_string());
        self
    }

    pub fn without_feat(mut self) -> Self {
        self.feat = None;
        self
    }

    pub fn without_edges(mut self) -> Self {
        self.edges = None;
        self
    }

    fn write_to(&self, dir: &Path) {
        let files = [
            ("edges", &self.edges),
            ("featnames", &self.featnames),
            ("feat", &self.feat),
            ("egofeat", &self.egofeat),
        ];
        for (extension, contents) in files {
            if let Some(contents) = contents {
                fs::write(dir.join(format!("{}.{}", self.ego, extension)), contents)
                    .expect("Failed to write fixture file");
            }
        }
    }
}

/// A dataset directory that is removed when dropped
pub struct TestDataset {
    dir: TempDir,
}

impl TestDataset {
    pub fn new(egos: &[EgoFiles]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for ego in egos {
            ego.write_to(dir.path());
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
