//! Output types for the filter-graph parser.

use serde::{Deserialize, Serialize};

use crate::graph::FilterDefinition;

/// One `key[=value]` entry of a filter specification.
///
/// Order is significant and duplicates are allowed, so arguments are kept
/// in a `Vec` rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    /// The option key, or a positional value when `value` is `None`.
    pub key: String,
    /// The option value, absent for key-only arguments.
    pub value: Option<String>,
}

impl Argument {
    /// A `key=value` argument.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A key-only argument.
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Stock definition produced for every chain of a parsed graph.
///
/// Strings are carried verbatim: escape backslashes and quote characters
/// present in the input are kept, so a node can be rendered back into an
/// equivalent expression.
///
/// # Examples
///
/// ```
/// let graph = fg_parser::parse("[in]scale=w=1280:h=720[out]").unwrap();
/// let node = &graph[0][0];
/// assert_eq!(node.name, "scale");
/// assert_eq!(node.value_of("w"), Some("1280"));
/// assert_eq!(node.source_labels, vec!["in"]);
/// assert_eq!(node.destination_labels, vec!["out"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterNode {
    /// Labels of the pads feeding this filter, in textual order.
    pub source_labels: Vec<String>,

    /// Filter name; empty when the chain carries only labels.
    pub name: String,

    /// Arguments in textual order.
    pub arguments: Vec<Argument>,

    /// Labels of the pads this filter writes to, in textual order.
    pub destination_labels: Vec<String>,
}

impl FilterNode {
    /// Create a node with only the filter name populated.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// First argument with the given key.
    pub fn argument(&self, key: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.key == key)
    }

    /// Value of the first argument with the given key.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.argument(key).and_then(|a| a.value.as_deref())
    }

    /// Whether nothing is routed into this filter by label.
    pub fn is_source(&self) -> bool {
        self.source_labels.is_empty()
    }

    /// Whether this filter's output is not routed anywhere by label.
    pub fn is_sink(&self) -> bool {
        self.destination_labels.is_empty()
    }
}

impl FilterDefinition for FilterNode {
    fn set_source_labels(&mut self, labels: Vec<String>) {
        self.source_labels = labels;
    }

    fn set_destination_labels(&mut self, labels: Vec<String>) {
        self.destination_labels = labels;
    }

    fn set_filter_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_arguments(&mut self, arguments: Vec<Argument>) {
        self.arguments = arguments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_lookup_returns_first_match() {
        let mut node = FilterNode::new("f");
        node.arguments = vec![
            Argument::new("a", "1"),
            Argument::key_only("b"),
            Argument::new("a", "2"),
        ];
        assert_eq!(node.value_of("a"), Some("1"));
        assert_eq!(node.argument("b"), Some(&Argument::key_only("b")));
        assert_eq!(node.value_of("b"), None);
        assert!(node.argument("c").is_none());
    }

    #[test]
    fn source_and_sink() {
        let mut node = FilterNode::new("anullsrc");
        assert!(node.is_source());
        assert!(node.is_sink());
        node.destination_labels.push("a".into());
        assert!(!node.is_sink());
    }

    #[test]
    fn serde_roundtrip() {
        let mut node = FilterNode::new("eq");
        node.arguments.push(Argument::new("brightness", "0.1"));
        node.destination_labels.push("v1".into());
        let json = serde_json::to_string(&node).unwrap();
        let back: FilterNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
