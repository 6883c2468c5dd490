//! Argument coercion for the QName functions.
//!
//! Each helper consumes one positional argument sequence and either yields
//! the typed value or a type error. Nothing here retries or recovers.
use crate::engine::runtime::Error;
use crate::model::{NodeKind, XdmNode};
use crate::qname::QName;
use crate::xdm::{XdmAtomicValue, XdmItem};

pub(crate) fn zero_or_one<N>(seq: &[XdmItem<N>]) -> Result<Option<&XdmItem<N>>, Error> {
    match seq {
        [] => Ok(None),
        [item] => Ok(Some(item)),
        _ => Err(Error::type_err(format!(
            "expected at most one item, got {}",
            seq.len()
        ))),
    }
}

/// `xs:string?` argument. Untyped, anyURI and NCName values are promoted.
pub(crate) fn opt_string<N: XdmNode>(seq: &[XdmItem<N>]) -> Result<Option<String>, Error> {
    match zero_or_one(seq)? {
        None => Ok(None),
        Some(XdmItem::Atomic(
            XdmAtomicValue::String(s)
            | XdmAtomicValue::UntypedAtomic(s)
            | XdmAtomicValue::AnyUri(s)
            | XdmAtomicValue::NCName(s),
        )) => Ok(Some(s.clone())),
        Some(XdmItem::Atomic(other)) => Err(Error::type_err(format!(
            "expected xs:string, got {}",
            other.type_name()
        ))),
        Some(XdmItem::Node(_)) => Err(Error::type_err("expected xs:string, got node()")),
    }
}

/// `xs:string` argument: exactly one value.
pub(crate) fn require_string<N: XdmNode>(seq: &[XdmItem<N>], func: &str) -> Result<String, Error> {
    opt_string(seq)?
        .ok_or_else(|| Error::type_err(format!("{func} requires xs:string, got empty sequence")))
}

/// `xs:QName?` argument.
pub(crate) fn opt_qname<N: XdmNode>(seq: &[XdmItem<N>]) -> Result<Option<QName>, Error> {
    match zero_or_one(seq)? {
        None => Ok(None),
        Some(XdmItem::Atomic(XdmAtomicValue::QName(q))) => Ok(Some(q.clone())),
        Some(XdmItem::Atomic(XdmAtomicValue::UntypedAtomic(s))) => Err(Error::Cast(format!(
            "cannot cast untyped value '{s}' to xs:QName"
        ))),
        Some(XdmItem::Atomic(other)) => Err(Error::type_err(format!(
            "expected xs:QName, got {}",
            other.type_name()
        ))),
        Some(XdmItem::Node(_)) => Err(Error::type_err("expected xs:QName, got node()")),
    }
}

/// `element()` argument: exactly one element node.
pub(crate) fn require_element<N: XdmNode>(seq: &[XdmItem<N>], func: &str) -> Result<N, Error> {
    match zero_or_one(seq)? {
        Some(XdmItem::Node(n)) if n.kind() == NodeKind::Element => Ok(n.clone()),
        Some(XdmItem::Node(n)) => Err(Error::type_err(format!(
            "{func} requires element(), got {:?} node",
            n.kind()
        ))),
        Some(XdmItem::Atomic(a)) => Err(Error::type_err(format!(
            "{func} requires element(), got {}",
            a.type_name()
        ))),
        None => Err(Error::type_err(format!(
            "{func} requires element(), got empty sequence"
        ))),
    }
}
