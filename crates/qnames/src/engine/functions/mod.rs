//! The QName function family and its dispatcher.
//!
//! ```
//! use xpath_qnames::engine::functions::QNameFunction;
//! use xpath_qnames::engine::runtime::{CallCtx, ResolutionContextBuilder};
//! use xpath_qnames::model::simple::SimpleNode;
//! use xpath_qnames::xdm::{ExpandedName, XdmAtomicValue, XdmItem};
//!
//! let sc = ResolutionContextBuilder::new().with_base_uri("http://e/x/").build();
//! let f = QNameFunction::lookup(&ExpandedName::new(None, "resolve-uri"), 1).unwrap();
//! let arg = vec![XdmItem::<SimpleNode>::Atomic(XdmAtomicValue::String("a/b".into()))];
//! let out = f.call(&CallCtx::new(&sc), &[arg]).unwrap();
//! assert_eq!(out, vec![XdmItem::Atomic(XdmAtomicValue::AnyUri("http://e/x/a/b".into()))]);
//! ```
use crate::consts::FNS;
use crate::engine::runtime::{CallCtx, Error};
use crate::model::XdmNode;
use crate::xdm::{ExpandedName, XdmSequence};

mod common;
mod qnames;
mod uri;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QNameFunction {
    ResolveQName,
    QName,
    LocalNameFromQName,
    PrefixFromQName,
    NamespaceUriForPrefix,
    InScopePrefixes,
    ResolveUri,
}

impl QNameFunction {
    pub const ALL: [QNameFunction; 7] = [
        QNameFunction::ResolveQName,
        QNameFunction::QName,
        QNameFunction::LocalNameFromQName,
        QNameFunction::PrefixFromQName,
        QNameFunction::NamespaceUriForPrefix,
        QNameFunction::InScopePrefixes,
        QNameFunction::ResolveUri,
    ];

    /// Local name in the `fn` namespace.
    pub fn local_name(self) -> &'static str {
        match self {
            QNameFunction::ResolveQName => "resolve-QName",
            QNameFunction::QName => "QName",
            QNameFunction::LocalNameFromQName => "local-name-from-QName",
            QNameFunction::PrefixFromQName => "prefix-from-QName",
            QNameFunction::NamespaceUriForPrefix => "namespace-uri-for-prefix",
            QNameFunction::InScopePrefixes => "in-scope-prefixes",
            QNameFunction::ResolveUri => "resolve-uri",
        }
    }

    pub fn name(self) -> ExpandedName {
        ExpandedName::fn_name(self.local_name())
    }

    /// Inclusive `(min, max)` number of arguments.
    pub fn arity(self) -> (usize, usize) {
        match self {
            QNameFunction::ResolveQName
            | QNameFunction::QName
            | QNameFunction::NamespaceUriForPrefix => (2, 2),
            QNameFunction::LocalNameFromQName
            | QNameFunction::PrefixFromQName
            | QNameFunction::InScopePrefixes => (1, 1),
            QNameFunction::ResolveUri => (1, 2),
        }
    }

    /// Find a function by name and arity. Names without a namespace are
    /// looked up in the `fn` namespace.
    pub fn lookup(name: &ExpandedName, arity: usize) -> Result<Self, Error> {
        let in_fn_ns = name.ns_uri.as_deref().is_none_or(|ns| ns == FNS);
        let func = Self::ALL
            .into_iter()
            .find(|f| in_fn_ns && f.local_name() == name.local)
            .ok_or_else(|| Error::UnknownFunction(name.clone()))?;
        let (min, max) = func.arity();
        if !(min..=max).contains(&arity) {
            return Err(Error::WrongArity {
                name: func.name(),
                arity,
                min,
                max,
            });
        }
        Ok(func)
    }

    /// Invoke the function. Returns at most one item, except
    /// `in-scope-prefixes`.
    pub fn call<N: XdmNode>(
        self,
        ctx: &CallCtx,
        args: &[XdmSequence<N>],
    ) -> Result<XdmSequence<N>, Error> {
        let (min, max) = self.arity();
        if !(min..=max).contains(&args.len()) {
            return Err(Error::WrongArity {
                name: self.name(),
                arity: args.len(),
                min,
                max,
            });
        }
        tracing::trace!(function = self.local_name(), argc = args.len(), "calling");
        match self {
            QNameFunction::ResolveQName => qnames::resolve_qname_fn(ctx, args),
            QNameFunction::QName => qnames::qname_fn(ctx, args),
            QNameFunction::LocalNameFromQName => qnames::local_name_from_qname_fn(ctx, args),
            QNameFunction::PrefixFromQName => qnames::prefix_from_qname_fn(ctx, args),
            QNameFunction::NamespaceUriForPrefix => qnames::namespace_uri_for_prefix_fn(ctx, args),
            QNameFunction::InScopePrefixes => qnames::in_scope_prefixes_fn(ctx, args),
            QNameFunction::ResolveUri => uri::resolve_uri_fn(ctx, args),
        }
    }
}
