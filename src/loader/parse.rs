//! Line parsers for the four ego-network file kinds
//!
//! Every parser returns `None` for a malformed line; the loader skips those.

use crate::graph::AttributeNode;

/// One parsed `.featnames` line
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureName {
    /// Leading integer, defines the column order of feature vectors
    pub position: i64,
    pub attribute: AttributeNode,
}

/// Parse an `.edges` line: exactly two whitespace-separated names
pub fn parse_edge_line(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

/// Parse a `.featnames` line of the form `<index> <name...>;<value>`
///
/// The name runs up to the last `;`, so names may themselves contain `;`.
pub fn parse_featname_line(line: &str) -> Option<FeatureName> {
    let (position, rest) = line.split_once(char::is_whitespace)?;
    let position = position.parse::<i64>().ok()?;
    let (name, value) = rest.rsplit_once(';')?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(FeatureName {
        position,
        attribute: AttributeNode::new(name.trim(), value),
    })
}

/// Parse a whole `.featnames` file, ordered by leading integer
///
/// The sort is stable, so duplicate positions keep file order.
pub fn parse_featnames(contents: &str) -> (Vec<FeatureName>, usize) {
    let mut skipped = 0;
    let mut features: Vec<FeatureName> = contents
        .lines()
        .filter_map(|line| {
            let parsed = parse_featname_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            parsed
        })
        .collect();
    features.sort_by_key(|f| f.position);
    (features, skipped)
}

/// Parse a `.feat` line: a person name followed by exactly `width` integers
pub fn parse_feat_line(line: &str, width: usize) -> Option<(&str, Vec<i64>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let values = parse_values(tokens, width)?;
    Some((name, values))
}

/// Parse an `.egofeat` line: exactly `width` integers
pub fn parse_egofeat_line(line: &str, width: usize) -> Option<Vec<i64>> {
    parse_values(line.split_whitespace(), width)
}

fn parse_values<'a>(tokens: impl Iterator<Item = &'a str>, width: usize) -> Option<Vec<i64>> {
    let values = tokens
        .map(|t| t.parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;
    (values.len() == width).then_some(values)
}
