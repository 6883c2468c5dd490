//! In-scope namespace computation.
//!
//! The prefixes visible at an element are: `xml` (always), the empty prefix
//! when the query configures a default element namespace, and every
//! non-empty prefix declared on the element or one of its ancestors. Nearer
//! declarations shadow farther ones; the resulting order is stable and free
//! of duplicates.
//!
//! URIs for non-empty prefixes come from the query's [`NamespaceTable`]
//! first; a prefix the table does not know is bound to the URI of its
//! nearest in-document declaration.
//!
//! [`NamespaceTable`]: crate::engine::runtime::NamespaceTable
use crate::consts::{XML_PREFIX, XML_URI};
use crate::engine::runtime::ResolutionContext;
use crate::model::XdmNode;
use itertools::Itertools;

/// Prefix → URI pairs visible at `node`, in resolution order.
pub fn in_scope_namespaces<N: XdmNode>(node: &N, ctx: &ResolutionContext) -> Vec<(String, String)> {
    let default_ns = default_namespace(node, ctx);
    let seeds = std::iter::once((XML_PREFIX.to_string(), XML_URI.to_string()))
        .chain(default_ns.map(|uri| (String::new(), uri)));
    let declared = node.ancestors_or_self().flat_map(|n| {
        let bindings = n.namespace_bindings();
        tracing::trace!(node = ?n.name(), count = bindings.len(), "collecting namespace bindings");
        bindings.into_iter().filter(|b| !b.is_default())
    });
    seeds
        .chain(declared.map(|b| {
            let uri = ctx
                .namespaces
                .uri(&b.prefix)
                .map_or(b.uri, str::to_string);
            (b.prefix, uri)
        }))
        .unique_by(|(prefix, _)| prefix.clone())
        .collect()
}

/// Prefixes visible at `node`, in the same order as [`in_scope_namespaces`].
pub fn in_scope_prefixes<N: XdmNode>(node: &N, ctx: &ResolutionContext) -> Vec<String> {
    in_scope_namespaces(node, ctx)
        .into_iter()
        .map(|(prefix, _)| prefix)
        .collect()
}

/// Look up the URI bound to `prefix` at `node`.
///
/// Returns `None` when the prefix is not in scope; callers decide whether
/// that is an error.
pub fn resolve_prefix<N: XdmNode>(prefix: &str, node: &N, ctx: &ResolutionContext) -> Option<String> {
    let found = in_scope_namespaces(node, ctx)
        .into_iter()
        .find(|(p, _)| p == prefix)
        .map(|(_, uri)| uri);
    tracing::trace!(prefix, uri = ?found, "resolved namespace prefix");
    found
}

// Static default element namespace, or the nearest `xmlns="..."` in the
// document when that is enabled.
fn default_namespace<N: XdmNode>(node: &N, ctx: &ResolutionContext) -> Option<String> {
    if ctx.document_default_namespaces {
        let declared = node.ancestors_or_self().find_map(|n| {
            n.namespace_bindings()
                .into_iter()
                .find(|b| b.is_default())
                .map(|b| b.uri)
        });
        if let Some(uri) = declared {
            // xmlns="" undeclares; the static default does not come back.
            return (!uri.is_empty()).then_some(uri);
        }
    }
    ctx.default_element_namespace
        .clone()
        .filter(|u| !u.is_empty())
}
