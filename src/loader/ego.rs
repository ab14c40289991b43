//! Ego-network directory loader
//!
//! A dataset directory holds four files per ego id:
//!
//! - `<ego>.edges`: friendships among the ego's alters, one pair per line
//! - `<ego>.featnames`: `<index> <name>;<value>` feature column labels
//! - `<ego>.feat`: `<alter> <v0> ... <vk-1>` feature vectors of the alters
//! - `<ego>.egofeat`: `<v0> ... <vk-1>` feature vector of the ego
//!
//! Ego ids are the stems of the `.egofeat` files.

use super::options::LoadOptions;
use super::parse::{parse_edge_line, parse_egofeat_line, parse_feat_line, parse_featnames};
use crate::graph::{GraphError, SanNode, SocialAttributeNetwork, DEFAULT_WEIGHT};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace};
use walkdir::WalkDir;

const EGO_SUFFIX: &str = ".egofeat";

/// Errors that abort a load
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot list dataset directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Dataset path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Accepted and skipped line counts for one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineCounts {
    accepted: usize,
    skipped: usize,
}

impl LineCounts {
    fn record(&mut self, accepted: bool) {
        if accepted {
            self.accepted += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Builds a [`SocialAttributeNetwork`] from an ego-network dataset directory
#[derive(Debug, Clone, Default)]
pub struct EgoNetworkLoader {
    options: LoadOptions,
}

impl EgoNetworkLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load every ego found in `dir` into one network
    ///
    /// Any unreadable file aborts the whole load; malformed lines are skipped.
    pub fn load(&self, dir: impl AsRef<Path>) -> LoadResult<SocialAttributeNetwork> {
        let dir = dir.as_ref();
        let egos = discover_egos(dir)?;
        let mut graph = SocialAttributeNetwork::new();

        for ego in &egos {
            self.load_ego(&mut graph, dir, ego)?;
        }

        info!(
            path = %dir.display(),
            egos = egos.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "loaded ego-network dataset"
        );
        Ok(graph)
    }

    fn load_ego(
        &self,
        graph: &mut SocialAttributeNetwork,
        dir: &Path,
        ego: &str,
    ) -> LoadResult<()> {
        let directed = self.options.directed;
        let attribute_directed = self.options.attribute_edges_directed();
        let ego_index = graph.add_vertex(SanNode::social(ego));

        // Friendships, plus the implicit ego -> alter star edge
        let mut edge_counts = LineCounts::default();
        for (number, line) in read_ego_file(dir, ego, "edges")?.lines().enumerate() {
            let parsed = parse_edge_line(line);
            edge_counts.record(parsed.is_some());
            let Some((first, second)) = parsed else {
                trace!(ego, file = "edges", line = number + 1, "skipping malformed line");
                continue;
            };
            let first = graph.add_vertex(SanNode::social(first));
            let second = graph.add_vertex(SanNode::social(second));
            graph.add_weighted_edge(first, second, DEFAULT_WEIGHT, directed)?;
            graph.add_weighted_edge(ego_index, first, DEFAULT_WEIGHT, directed)?;
        }

        // Attribute vertices, in column order of the feature vectors
        let (features, featname_skipped) = parse_featnames(&read_ego_file(dir, ego, "featnames")?);
        let columns: Vec<usize> = features
            .into_iter()
            .map(|f| graph.add_vertex(f.attribute.into()))
            .collect();

        let mut feat_counts = LineCounts::default();
        for (number, line) in read_ego_file(dir, ego, "feat")?.lines().enumerate() {
            let parsed = parse_feat_line(line, columns.len());
            feat_counts.record(parsed.is_some());
            let Some((name, values)) = parsed else {
                trace!(ego, file = "feat", line = number + 1, "skipping malformed line");
                continue;
            };
            let person = graph.add_vertex(SanNode::social(name));
            link_features(graph, person, &columns, &values, attribute_directed)?;
        }

        let mut egofeat_counts = LineCounts::default();
        for (number, line) in read_ego_file(dir, ego, "egofeat")?.lines().enumerate() {
            let parsed = parse_egofeat_line(line, columns.len());
            egofeat_counts.record(parsed.is_some());
            let Some(values) = parsed else {
                trace!(ego, file = "egofeat", line = number + 1, "skipping malformed line");
                continue;
            };
            link_features(graph, ego_index, &columns, &values, attribute_directed)?;
        }

        debug!(
            ego,
            edges = edge_counts.accepted,
            edges_skipped = edge_counts.skipped,
            features = columns.len(),
            featnames_skipped = featname_skipped,
            feat = feat_counts.accepted,
            feat_skipped = feat_counts.skipped,
            egofeat_skipped = egofeat_counts.skipped,
            "loaded ego"
        );
        Ok(())
    }
}

/// Load an ego-network dataset with default options and the given directedness
pub fn load_ego_network(
    dir: impl AsRef<Path>,
    directed_edge: bool,
) -> LoadResult<SocialAttributeNetwork> {
    EgoNetworkLoader::new(LoadOptions::new().with_directed(directed_edge)).load(dir)
}

/// Add one weighted edge per non-zero feature value
fn link_features(
    graph: &mut SocialAttributeNetwork,
    from: usize,
    columns: &[usize],
    values: &[i64],
    directed: bool,
) -> LoadResult<()> {
    for (&column, &value) in columns.iter().zip(values) {
        if value != 0 {
            graph.add_weighted_edge(from, column, value as f64, directed)?;
        }
    }
    Ok(())
}

/// Ego ids in `dir`, ordered by file name
fn discover_egos(dir: &Path) -> LoadResult<Vec<String>> {
    if dir.is_file() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut egos = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| LoadError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        match name.strip_suffix(EGO_SUFFIX) {
            Some(ego) if !ego.is_empty() => egos.push(ego.to_string()),
            _ => {}
        }
    }

    debug!(path = %dir.display(), count = egos.len(), "discovered egos");
    Ok(egos)
}

fn read_ego_file(dir: &Path, ego: &str, extension: &str) -> LoadResult<String> {
    let path = dir.join(format!("{}.{}", ego, extension));
    std::fs::read_to_string(&path).map_err(|source| LoadError::ReadFile { path, source })
}
