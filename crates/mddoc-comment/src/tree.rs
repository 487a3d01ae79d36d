//! Tree node representation for documentation-comment XML fragments.

/// Node in a parsed XML fragment.
///
/// Attributes are kept as an ordered list, not a map: serialization must
/// reproduce them in document order.
#[derive(Debug, Clone, Default)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// Direct text content.
    pub text: String,
    /// Text after the element (XML tail).
    pub tail: String,
    /// Element attributes in document order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<XmlNode>,
    /// Whether any of the direct content came from a CDATA section.
    pub(crate) cdata: bool,
    /// Marked for removal by the paragraph unwrapper.
    pub(crate) unnecessary: bool,
}

impl XmlNode {
    /// Create a new node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set tail content.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Set attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Vec<(String, String)>) -> Self {
        self.attrs = attrs;
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<XmlNode>) -> Self {
        self.children = children;
        self
    }

    /// Append text at the current insertion point: the last child's tail,
    /// or this node's own text when it has no children.
    pub fn append_text(&mut self, text: &str) {
        if let Some(last_child) = self.children.last_mut() {
            last_child.tail.push_str(text);
        } else {
            self.text.push_str(text);
        }
    }

    /// Whether any content in this element is more than markup: direct
    /// non-whitespace text, non-whitespace text between children, or
    /// literal CDATA content of any kind.
    #[must_use]
    pub fn has_loose_content(&self) -> bool {
        if self.cdata || !self.text.trim().is_empty() {
            return true;
        }
        self.children
            .iter()
            .any(|child| !child.tail.trim().is_empty())
    }
}
