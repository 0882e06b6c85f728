//! Tree-structured wire message exchanged with the transport.
//!
//! The transport owns framing and encoding; this module only models the
//! decoded shape: a tag, a string attribute map, and content that is either
//! absent, raw bytes, or an ordered list of child nodes.

use std::collections::BTreeMap;

/// Payload of a [`BinaryNode`]. A node never carries bytes and children at
/// the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeContent {
    #[default]
    None,
    Bytes(Vec<u8>),
    Children(Vec<BinaryNode>),
}

/// A single element of the wire tree.
///
/// Attribute order carries no meaning on the wire; a `BTreeMap` keeps
/// iteration deterministic for logging and test snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryNode {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub content: NodeContent,
}

impl BinaryNode {
    /// Creates a node with no attributes and no content.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            content: NodeContent::None,
        }
    }

    /// Shorthand for a leaf node whose content is the UTF-8 bytes of `text`.
    #[must_use]
    pub fn text(tag: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self::new(tag).with_text(text)
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.content = NodeContent::Bytes(text.as_ref().as_bytes().to_vec());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BinaryNode>) -> Self {
        self.content = NodeContent::Children(children);
        self
    }

    /// Returns the attribute value for `key`, if present.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Child nodes in order; empty for byte or absent content.
    #[must_use]
    pub fn child_nodes(&self) -> &[BinaryNode] {
        match &self.content {
            NodeContent::Children(children) => children,
            _ => &[],
        }
    }

    /// First child whose tag equals `tag`.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&BinaryNode> {
        self.child_nodes().iter().find(|c| c.tag == tag)
    }

    /// All children whose tag equals `tag`, in document order.
    pub fn children<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a BinaryNode> + 'a {
        self.child_nodes().iter().filter(move |c| c.tag == tag)
    }

    /// Text content of this node. Byte content is decoded as UTF-8 (lossy);
    /// child or absent content yields `None`.
    #[must_use]
    pub fn content_string(&self) -> Option<String> {
        match &self.content {
            NodeContent::Bytes(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    /// Text content of the first child tagged `tag`.
    #[must_use]
    pub fn child_string(&self, tag: &str) -> Option<String> {
        self.child(tag).and_then(BinaryNode::content_string)
    }
}
