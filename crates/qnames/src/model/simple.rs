//! Simple in-memory tree implementation of [`XdmNode`] used in tests and quick prototypes.
//!
//! Nodes are `Arc`-backed and immutable once built, so a finished tree can be
//! shared across threads.
//!
//! ```
//! use xpath_qnames::model::simple::{doc, elem, ns};
//! use xpath_qnames::XdmNode;
//!
//! // <root xmlns:p="urn:one"><child/></root>
//! let document = doc()
//!     .child(elem("root").namespace(ns("p", "urn:one")).child(elem("child")))
//!     .build();
//! let root = document.children()[0].clone();
//! let child = root.children()[0].clone();
//! assert_eq!(child.lookup_namespace_uri("p").as_deref(), Some("urn:one"));
//! assert_eq!(child.parent(), Some(root));
//! ```
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::model::{NamespaceBinding, NodeKind, XdmNode};
use crate::qname::QName;

struct Inner {
    kind: NodeKind,
    name: Option<QName>,
    value: Option<String>,
    parent: RwLock<Option<Weak<Inner>>>,
    namespaces: Vec<NamespaceBinding>,
    attributes: Vec<SimpleNode>,
    children: Vec<SimpleNode>,
}

#[derive(Clone)]
pub struct SimpleNode(Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleNode {}

impl std::hash::Hash for SimpleNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state)
    }
}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("kind", &self.0.kind)
            .field("name", &self.0.name)
            .field("namespaces", &self.0.namespaces)
            .finish()
    }
}

impl SimpleNode {
    fn leaf(kind: NodeKind, name: Option<QName>, value: &str) -> Self {
        SimpleNode(Arc::new(Inner {
            kind,
            name,
            value: Some(value.to_string()),
            parent: RwLock::new(None),
            namespaces: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }))
    }

    pub fn document() -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Document, None)
    }

    /// Element named by a lexical QName; the namespace is left unresolved.
    pub fn element(name: &str) -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Element, Some(split_name(name, None)))
    }

    /// Element whose name is already resolved to `ns_uri`.
    pub fn element_ns(ns_uri: &str, name: &str) -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Element, Some(split_name(name, Some(ns_uri))))
    }

    pub fn attribute(name: &str, value: &str) -> SimpleNode {
        Self::leaf(NodeKind::Attribute, Some(split_name(name, None)), value)
    }

    pub fn text(value: &str) -> SimpleNode {
        Self::leaf(NodeKind::Text, None, value)
    }

    pub fn comment(value: &str) -> SimpleNode {
        Self::leaf(NodeKind::Comment, None, value)
    }

    pub fn children(&self) -> Vec<SimpleNode> {
        self.0.children.clone()
    }

    pub fn attributes(&self) -> Vec<SimpleNode> {
        self.0.attributes.clone()
    }

    pub fn value(&self) -> Option<&str> {
        self.0.value.as_deref()
    }

    /// Resolve a prefix against the declarations on this node and its
    /// ancestors, ignoring any query context.
    pub fn lookup_namespace_uri(&self, prefix: &str) -> Option<String> {
        self.ancestors_or_self().find_map(|n| {
            n.0.namespaces
                .iter()
                .find(|b| b.prefix == prefix)
                .map(|b| b.uri.clone())
        })
    }

    fn set_parent(&self, parent: &Arc<Inner>) {
        let mut slot = self.0.parent.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::downgrade(parent));
    }
}

fn split_name(name: &str, ns_uri: Option<&str>) -> QName {
    match name.split_once(':') {
        Some((p, l)) => QName::from_parts(Some(p), l, ns_uri),
        None => QName::from_parts(None, name, ns_uri),
    }
}

pub struct SimpleNodeBuilder {
    kind: NodeKind,
    name: Option<QName>,
    namespaces: Vec<NamespaceBinding>,
    attributes: Vec<SimpleNode>,
    children: Vec<SimpleNode>,
}

impl SimpleNodeBuilder {
    fn new(kind: NodeKind, name: Option<QName>) -> Self {
        Self {
            kind,
            name,
            namespaces: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Into<SimpleNodeOrBuilder>) -> Self {
        self.children.push(child.into().finish());
        self
    }

    pub fn children<I: IntoIterator<Item = SimpleNodeOrBuilder>>(mut self, it: I) -> Self {
        self.children.extend(it.into_iter().map(SimpleNodeOrBuilder::finish));
        self
    }

    pub fn attr(mut self, attr: SimpleNode) -> Self {
        debug_assert!(attr.kind() == NodeKind::Attribute);
        self.attributes.push(attr);
        self
    }

    pub fn namespace(mut self, binding: NamespaceBinding) -> Self {
        self.namespaces.push(binding);
        self
    }

    pub fn namespaces<I: IntoIterator<Item = NamespaceBinding>>(mut self, it: I) -> Self {
        self.namespaces.extend(it);
        self
    }

    pub fn build(self) -> SimpleNode {
        let node = SimpleNode(Arc::new(Inner {
            kind: self.kind,
            name: self.name,
            value: None,
            parent: RwLock::new(None),
            namespaces: self.namespaces,
            attributes: self.attributes,
            children: self.children,
        }));
        for n in node.0.attributes.iter().chain(node.0.children.iter()) {
            n.set_parent(&node.0);
        }
        node
    }
}

pub enum SimpleNodeOrBuilder {
    Built(SimpleNode),
    Builder(SimpleNodeBuilder),
}

impl SimpleNodeOrBuilder {
    fn finish(self) -> SimpleNode {
        match self {
            SimpleNodeOrBuilder::Built(n) => n,
            SimpleNodeOrBuilder::Builder(b) => b.build(),
        }
    }
}

impl From<SimpleNode> for SimpleNodeOrBuilder {
    fn from(n: SimpleNode) -> Self {
        SimpleNodeOrBuilder::Built(n)
    }
}

impl From<SimpleNodeBuilder> for SimpleNodeOrBuilder {
    fn from(b: SimpleNodeBuilder) -> Self {
        SimpleNodeOrBuilder::Builder(b)
    }
}

// Convenience helper functions for concise test code
pub fn doc() -> SimpleNodeBuilder {
    SimpleNode::document()
}
pub fn elem(name: &str) -> SimpleNodeBuilder {
    SimpleNode::element(name)
}
pub fn elem_ns(ns_uri: &str, name: &str) -> SimpleNodeBuilder {
    SimpleNode::element_ns(ns_uri, name)
}
pub fn attr(name: &str, value: &str) -> SimpleNode {
    SimpleNode::attribute(name, value)
}
pub fn text(value: &str) -> SimpleNode {
    SimpleNode::text(value)
}
pub fn ns(prefix: &str, uri: &str) -> NamespaceBinding {
    NamespaceBinding::new(prefix, uri)
}

impl XdmNode for SimpleNode {
    fn kind(&self) -> NodeKind {
        self.0.kind.clone()
    }

    fn name(&self) -> Option<QName> {
        self.0.name.clone()
    }

    fn parent(&self) -> Option<Self> {
        self.0
            .parent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
            .map(SimpleNode)
    }

    fn namespace_bindings(&self) -> Vec<NamespaceBinding> {
        self.0.namespaces.clone()
    }
}
