pub mod simple;

use crate::qname::QName;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

/// A namespace declaration made directly on one node.
///
/// An empty `prefix` is a default namespace declaration (`xmlns="..."`); an
/// empty `uri` on it undeclares the default namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceBinding {
    pub prefix: String,
    pub uri: String,
}

impl NamespaceBinding {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.prefix.is_empty()
    }
}

/// Read-only view of a document node, implemented by the host tree.
pub trait XdmNode: Clone + Eq + core::fmt::Debug + Send + Sync {
    fn kind(&self) -> NodeKind;
    /// The node's own resolved name, if it has one.
    fn name(&self) -> Option<QName>;
    fn parent(&self) -> Option<Self>;
    /// Declarations made on this node only; inherited bindings are not
    /// repeated here.
    fn namespace_bindings(&self) -> Vec<NamespaceBinding> {
        Vec::new()
    }

    /// This node followed by its ancestors, nearest first.
    fn ancestors_or_self(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self.clone()), Self::parent)
    }
}
