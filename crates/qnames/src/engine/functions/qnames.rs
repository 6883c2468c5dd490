use super::common::{opt_qname, opt_string, require_element};
use crate::engine::namespaces::{in_scope_prefixes, resolve_prefix};
use crate::engine::runtime::{CallCtx, Error};
use crate::model::XdmNode;
use crate::qname::{QName, parse_qname_lexical};
use crate::xdm::{XdmAtomicValue, XdmItem, XdmSequence};

fn whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub(super) fn resolve_qname_fn<N: XdmNode>(
    ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    let Some(raw) = opt_string(&args[0])? else {
        return Ok(vec![]);
    };
    let lexical = raw.trim_matches(whitespace);
    let enode = require_element(&args[1], "resolve-QName")?;
    if lexical.is_empty() {
        return Ok(vec![]);
    }
    let (prefix, local) = parse_qname_lexical(lexical)?;
    let lookup = prefix.as_deref().unwrap_or("");
    let ns_uri = match (resolve_prefix(lookup, &enode, ctx.resolution), &prefix) {
        (Some(uri), _) => Some(uri),
        // no default element namespace in scope
        (None, None) => None,
        (None, Some(p)) => return Err(Error::UndeclaredPrefix(p.clone())),
    };
    Ok(vec![XdmItem::Atomic(XdmAtomicValue::QName(QName::resolved(
        prefix, local, ns_uri,
    )))])
}

pub(super) fn qname_fn<N: XdmNode>(
    _ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    let ns = opt_string(&args[0])?;
    let lexical = opt_string(&args[1])?.unwrap_or_default();
    let qn = QName::new(ns.as_deref(), &lexical)?;
    Ok(vec![XdmItem::Atomic(XdmAtomicValue::QName(qn))])
}

pub(super) fn local_name_from_qname_fn<N: XdmNode>(
    _ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    Ok(opt_qname(&args[0])?
        .map(|q| XdmItem::Atomic(XdmAtomicValue::NCName(q.local().to_string())))
        .into_iter()
        .collect())
}

pub(super) fn prefix_from_qname_fn<N: XdmNode>(
    _ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    Ok(opt_qname(&args[0])?
        .and_then(|q| q.prefix().map(str::to_string))
        .map(|p| XdmItem::Atomic(XdmAtomicValue::NCName(p)))
        .into_iter()
        .collect())
}

/// Never raises: every failure, including bad arguments, becomes `()`.
pub(super) fn namespace_uri_for_prefix_fn<N: XdmNode>(
    ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    let lookup = || -> Result<Option<String>, Error> {
        let enode = require_element(&args[1], "namespace-uri-for-prefix")?;
        let prefix = opt_string(&args[0])?.unwrap_or_default();
        Ok(resolve_prefix(&prefix, &enode, ctx.resolution))
    };
    match lookup() {
        Ok(Some(uri)) => Ok(vec![XdmItem::Atomic(XdmAtomicValue::AnyUri(uri))]),
        Ok(None) => Ok(vec![]),
        Err(e) => {
            tracing::debug!(error = %e, "namespace-uri-for-prefix: lookup failed, returning ()");
            Ok(vec![])
        }
    }
}

pub(super) fn in_scope_prefixes_fn<N: XdmNode>(
    ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    let enode = require_element(&args[0], "in-scope-prefixes")?;
    Ok(in_scope_prefixes(&enode, ctx.resolution)
        .into_iter()
        .map(|p| XdmItem::Atomic(XdmAtomicValue::String(p)))
        .collect())
}
