use crate::qname::QName;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedName {
    pub ns_uri: Option<String>,
    pub local: String,
}

impl ExpandedName {
    pub fn new(ns_uri: Option<String>, local: impl Into<String>) -> Self {
        Self {
            ns_uri,
            local: local.into(),
        }
    }

    /// Name in the standard function namespace.
    pub fn fn_name(local: impl Into<String>) -> Self {
        Self::new(Some(crate::consts::FNS.to_string()), local)
    }
}

impl fmt::Display for ExpandedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ns_uri {
            Some(ns) => write!(f, "Q{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Atomic values produced and consumed by the QName function family.
///
/// Only the string-derived types the functions actually traffic in are
/// modelled; everything else is rejected by the coercion helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum XdmAtomicValue {
    Integer(i64),
    String(String),
    UntypedAtomic(String),
    AnyUri(String),
    NCName(String),
    QName(QName),
}

impl XdmAtomicValue {
    /// XSD type name, used in type error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            XdmAtomicValue::Integer(_) => "xs:integer",
            XdmAtomicValue::String(_) => "xs:string",
            XdmAtomicValue::UntypedAtomic(_) => "xs:untypedAtomic",
            XdmAtomicValue::AnyUri(_) => "xs:anyURI",
            XdmAtomicValue::NCName(_) => "xs:NCName",
            XdmAtomicValue::QName(_) => "xs:QName",
        }
    }
}

impl fmt::Display for XdmAtomicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XdmAtomicValue::Integer(i) => write!(f, "{i}"),
            XdmAtomicValue::String(s)
            | XdmAtomicValue::UntypedAtomic(s)
            | XdmAtomicValue::AnyUri(s)
            | XdmAtomicValue::NCName(s) => f.write_str(s),
            XdmAtomicValue::QName(q) => write!(f, "{q}"),
        }
    }
}

pub type XdmSequence<N> = Vec<XdmItem<N>>;

#[derive(Debug, Clone, PartialEq)]
pub enum XdmItem<N> {
    Node(N),
    Atomic(XdmAtomicValue),
}

impl<N> From<XdmAtomicValue> for XdmItem<N> {
    fn from(value: XdmAtomicValue) -> Self {
        XdmItem::Atomic(value)
    }
}

impl<N> fmt::Display for XdmItem<N>
where
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XdmItem::Node(_) => write!(f, "<node>"),
            XdmItem::Atomic(a) => write!(f, "{:?}", a),
        }
    }
}
