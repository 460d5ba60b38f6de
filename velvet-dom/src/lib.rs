pub mod escape;
pub mod parse;
pub mod render;

pub use parse::{ParseError, parse_fragment};
pub use render::{render, render_all};

/// Elements that never carry children and serialize as `<tag/>`.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose body is kept verbatim by the parser and the serializer.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element {
        tag: String,
        attrs: Vec<Attr>,
        children: Vec<VNode>,
    },
    Text(String),
    Comment(String),
}

impl VNode {
    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element { .. })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attributes in document order; empty for text and comments.
    pub fn attrs(&self) -> &[Attr] {
        match self {
            VNode::Element { attrs, .. } => attrs,
            _ => &[],
        }
    }

    pub fn attrs_mut(&mut self) -> Option<&mut Vec<Attr>> {
        match self {
            VNode::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    /// First attribute value with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Appends an attribute. No-op on non-element nodes.
    pub fn push_attr(&mut self, attr: Attr) {
        if let Some(attrs) = self.attrs_mut() {
            attrs.push(attr);
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<VNode>> {
        match self {
            VNode::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        fn collect(node: &VNode, out: &mut String) {
            match node {
                VNode::Text(t) => out.push_str(t),
                VNode::Comment(_) => {}
                VNode::Element { children, .. } => {
                    for c in children {
                        collect(c, out);
                    }
                }
            }
        }
        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}

/// Ordered attribute list used by the [`h`] builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attrs(pub Vec<Attr>);

impl Attrs {
    pub fn new() -> Self {
        Self(Vec::new())
    }
    pub fn set(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.0.push(Attr::new(k, v));
        self
    }
}

// Allow concise attribute lists
impl From<()> for Attrs {
    fn from(_: ()) -> Self {
        Attrs::default()
    }
}
impl From<Vec<(&str, &str)>> for Attrs {
    fn from(v: Vec<(&str, &str)>) -> Self {
        Attrs(v.into_iter().map(|(k, v)| Attr::new(k, v)).collect())
    }
}
impl From<Vec<Attr>> for Attrs {
    fn from(v: Vec<Attr>) -> Self {
        Attrs(v)
    }
}

pub fn h(tag: impl Into<String>, attrs: impl Into<Attrs>, children: Vec<VNode>) -> VNode {
    VNode::Element {
        tag: tag.into(),
        attrs: attrs.into().0,
        children,
    }
}
pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}
