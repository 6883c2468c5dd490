use crate::consts::{ERR_NS, XML_PREFIX, XML_URI};
use crate::xdm::ExpandedName;
use std::collections::HashMap;

/// W3C error codes emitted by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    FOCA0002, // invalid lexical value
    FONS0004, // no namespace found for prefix
    FORG0001, // invalid value for cast
    FORG0002, // invalid argument to fn:resolve-uri
    XPTY0004, // type error
    XPST0017, // unknown function / wrong arity
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            FOCA0002 => "err:FOCA0002",
            FONS0004 => "err:FONS0004",
            FORG0001 => "err:FORG0001",
            FORG0002 => "err:FORG0002",
            XPTY0004 => "err:XPTY0004",
            XPST0017 => "err:XPST0017",
        }
    }

    /// Code as an expanded name in the `err` namespace.
    pub fn qname(&self) -> ExpandedName {
        let local = self.as_str().trim_start_matches("err:");
        ExpandedName::new(Some(ERR_NS.to_string()), local)
    }

    pub fn from_code(s: &str) -> Option<Self> {
        use ErrorCode::*;
        match s {
            "err:FOCA0002" => Some(FOCA0002),
            "err:FONS0004" => Some(FONS0004),
            "err:FORG0001" => Some(FORG0001),
            "err:FORG0002" => Some(FORG0002),
            "err:XPTY0004" => Some(XPTY0004),
            "err:XPST0017" => Some(XPST0017),
            _ => None,
        }
    }
}

/// Errors raised by the QName function family. Each variant carries the
/// offending value so the evaluator can report it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid lexical QName: '{0}'")]
    InvalidQNameLexeme(String),
    #[error("prefixed QName '{lexical}' requires a non-empty namespace URI")]
    InvalidUriForPrefixedName { lexical: String },
    #[error("no namespace declared for prefix '{0}'")]
    UndeclaredPrefix(String),
    #[error("invalid URI: '{0}'")]
    InvalidUri(String),
    #[error("type error: {0}")]
    Type(String),
    #[error("cast error: {0}")]
    Cast(String),
    #[error("unknown function: {0}")]
    UnknownFunction(ExpandedName),
    #[error("function {name} called with {arity} arguments (expected {min}..={max})")]
    WrongArity {
        name: ExpandedName,
        arity: usize,
        min: usize,
        max: usize,
    },
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidQNameLexeme(_) | Error::InvalidUriForPrefixedName { .. } => {
                ErrorCode::FOCA0002
            }
            Error::UndeclaredPrefix(_) => ErrorCode::FONS0004,
            Error::InvalidUri(_) => ErrorCode::FORG0002,
            Error::Type(_) => ErrorCode::XPTY0004,
            Error::Cast(_) => ErrorCode::FORG0001,
            Error::UnknownFunction(_) | Error::WrongArity { .. } => ErrorCode::XPST0017,
        }
    }

    /// Format the code as `err:LOCAL`.
    pub fn format_code(&self) -> &'static str {
        self.code().as_str()
    }

    pub fn type_err(msg: impl Into<String>) -> Self {
        Error::Type(msg.into())
    }
}

/// Query-wide prefix table. The `xml` prefix is always bound and cannot be
/// rebound.
#[derive(Debug, Clone)]
pub struct NamespaceTable {
    by_prefix: HashMap<String, String>,
}

impl Default for NamespaceTable {
    fn default() -> Self {
        let mut by_prefix = HashMap::new();
        by_prefix.insert(XML_PREFIX.to_string(), XML_URI.to_string());
        Self { by_prefix }
    }
}

impl NamespaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }

    /// Returns `false` when the binding was refused (`xml` or an empty prefix).
    fn bind(&mut self, prefix: String, uri: String) -> bool {
        if prefix == XML_PREFIX || prefix.is_empty() {
            return false;
        }
        self.by_prefix.insert(prefix, uri);
        true
    }
}

/// Read-only context the QName functions resolve against.
///
/// Built once per compiled query with [`ResolutionContextBuilder`]; the
/// functions never mutate it.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    pub namespaces: NamespaceTable,
    pub default_element_namespace: Option<String>,
    pub base_uri: Option<String>,
    /// Let `xmlns="..."` declarations in the document bind the empty prefix.
    pub document_default_namespaces: bool,
}

pub struct ResolutionContextBuilder {
    ctx: ResolutionContext,
}

impl Default for ResolutionContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionContextBuilder {
    pub fn new() -> Self {
        Self {
            ctx: ResolutionContext::default(),
        }
    }

    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.ctx.base_uri = Some(uri.into());
        self
    }

    /// An empty URI leaves the default element namespace unset.
    pub fn with_default_element_namespace(mut self, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        self.ctx.default_element_namespace = (!uri.is_empty()).then_some(uri);
        self
    }

    /// Register a namespace prefix → URI mapping. Attempts to rebind the
    /// reserved `xml` prefix are ignored.
    pub fn with_namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !self.ctx.namespaces.bind(prefix.clone(), uri.into()) {
            tracing::debug!(%prefix, "ignoring reserved or empty namespace prefix");
        }
        self
    }

    pub fn with_document_default_namespaces(mut self, enabled: bool) -> Self {
        self.ctx.document_default_namespaces = enabled;
        self
    }

    pub fn build(self) -> ResolutionContext {
        self.ctx
    }
}

/// Context passed into function implementations.
#[derive(Debug, Clone, Copy)]
pub struct CallCtx<'a> {
    pub resolution: &'a ResolutionContext,
}

impl<'a> CallCtx<'a> {
    pub fn new(resolution: &'a ResolutionContext) -> Self {
        Self { resolution }
    }
}
