//! Vertex values of the social-attribute network

use serde::{Deserialize, Serialize};

/// One categorical feature value, shared by every person who has it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeNode {
    /// Feature name (e.g., "education;school;id")
    pub attribute_name: String,
    /// Feature value (e.g., "anonymized feature 12")
    pub value: String,
}

impl AttributeNode {
    /// Create a new attribute node
    pub fn new(attribute_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for AttributeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.attribute_name, self.value)
    }
}

/// A vertex in the social-attribute network
///
/// Identity is structural: two nodes are the same vertex when they compare
/// equal, regardless of where they were parsed from.
///
/// Serializes externally tagged:
/// `{"SocialNode":"42"}` or `{"AttributeNode":{"attributeName":"gender","value":"77"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SanNode {
    /// A person, identified by name
    #[serde(rename = "SocialNode")]
    Social(String),
    /// An attribute value, identified by name and value
    #[serde(rename = "AttributeNode")]
    Attribute(AttributeNode),
}

impl SanNode {
    /// Create a social node
    pub fn social(name: impl Into<String>) -> Self {
        SanNode::Social(name.into())
    }

    /// Create an attribute node
    pub fn attribute(attribute_name: impl Into<String>, value: impl Into<String>) -> Self {
        SanNode::Attribute(AttributeNode::new(attribute_name, value))
    }

    pub fn is_social(&self) -> bool {
        matches!(self, SanNode::Social(_))
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self, SanNode::Attribute(_))
    }

    /// The person's name, if this is a social node
    pub fn as_social(&self) -> Option<&str> {
        match self {
            SanNode::Social(name) => Some(name),
            SanNode::Attribute(_) => None,
        }
    }

    /// The attribute payload, if this is an attribute node
    pub fn as_attribute(&self) -> Option<&AttributeNode> {
        match self {
            SanNode::Attribute(attribute) => Some(attribute),
            SanNode::Social(_) => None,
        }
    }
}

impl std::fmt::Display for SanNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SanNode::Social(name) => write!(f, "{}", name),
            SanNode::Attribute(attribute) => write!(f, "{}", attribute),
        }
    }
}

impl From<AttributeNode> for SanNode {
    fn from(attribute: AttributeNode) -> Self {
        SanNode::Attribute(attribute)
    }
}
