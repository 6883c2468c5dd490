//! QName and namespace functions of the XPath/XQuery standard library.
//!
//! Provides the `xs:QName` value type, in-scope namespace resolution over any
//! tree implementing [`XdmNode`], `resolve-uri`, and a dispatcher for the
//! seven functions of the family (`resolve-QName`, `QName`,
//! `local-name-from-QName`, `prefix-from-QName`, `namespace-uri-for-prefix`,
//! `in-scope-prefixes`, `resolve-uri`).
pub mod consts;
pub mod engine;
pub mod model;
pub mod qname;
pub mod uri;
pub mod xdm;

pub use engine::functions::QNameFunction;
pub use engine::namespaces::{in_scope_namespaces, in_scope_prefixes, resolve_prefix};
pub use engine::runtime::{
    CallCtx, Error, ErrorCode, NamespaceTable, ResolutionContext, ResolutionContextBuilder,
};
pub use model::{NamespaceBinding, NodeKind, XdmNode};
pub use qname::{QName, is_valid_ncname, parse_qname_lexical};
pub use uri::AnyUri;
pub use xdm::{ExpandedName, XdmAtomicValue, XdmItem, XdmSequence};
