//! `xs:QName` values and the lexical rules for NCNames and prefixed names.
//!
//! A [`QName`] is identified by its namespace URI and local name. The prefix
//! only records how the name was written: two names that differ in prefix
//! alone compare equal and hash identically.
//!
//! ```
//! use xpath_qnames::QName;
//!
//! let a = QName::new(Some("urn:x"), "a:item").unwrap();
//! let b = QName::new(Some("urn:x"), "b:item").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.prefix(), Some("a"));
//! assert!(QName::new(None, "p:item").is_err());
//! ```
use crate::engine::runtime::Error;
use core::fmt;
use core::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct QName {
    prefix: Option<String>,
    local: String,
    ns_uri: Option<String>,
}

impl QName {
    /// Build a QName from a namespace URI and a lexical `prefix:local` form.
    ///
    /// An empty URI means "no namespace". A prefixed lexical form needs a
    /// non-empty URI.
    pub fn new(ns_uri: Option<&str>, lexical: &str) -> Result<Self, Error> {
        let (prefix, local) = parse_qname_lexical(lexical)?;
        let ns_uri = ns_uri.filter(|u| !u.is_empty()).map(str::to_string);
        if prefix.is_some() && ns_uri.is_none() {
            return Err(Error::InvalidUriForPrefixedName {
                lexical: lexical.to_string(),
            });
        }
        Ok(Self {
            prefix,
            local,
            ns_uri,
        })
    }

    /// Name whose prefix has already been resolved to `ns_uri`.
    pub(crate) fn resolved(prefix: Option<String>, local: String, ns_uri: Option<String>) -> Self {
        Self {
            prefix,
            local,
            ns_uri: ns_uri.filter(|u| !u.is_empty()),
        }
    }

    /// Assemble a name from parts a node adapter already holds.
    ///
    /// No lexical validation happens here; adapters expose names of parsed
    /// documents, which are well-formed by construction.
    pub fn from_parts(prefix: Option<&str>, local: &str, ns_uri: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            local: local.to_string(),
            ns_uri: ns_uri.filter(|u| !u.is_empty()).map(str::to_string),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    /// `None` when the name is in no namespace.
    pub fn ns_uri(&self) -> Option<&str> {
        self.ns_uri.as_deref()
    }

    /// Lexical form, `prefix:local` or `local`.
    pub fn lexical(&self) -> String {
        self.to_string()
    }

    /// `Q{uri}local` notation; the prefix is dropped.
    pub fn to_clark(&self) -> String {
        format!("Q{{{}}}{}", self.ns_uri.as_deref().unwrap_or(""), self.local)
    }
}

impl PartialEq for QName {
    fn eq(&self, other: &Self) -> bool {
        self.ns_uri == other.ns_uri && self.local == other.local
    }
}

impl Eq for QName {}

impl Hash for QName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ns_uri.hash(state);
        self.local.hash(state);
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(p) => write!(f, "{}:{}", p, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Split a lexical QName into optional prefix and local part.
pub fn parse_qname_lexical(s: &str) -> Result<(Option<String>, String), Error> {
    let invalid = || Error::InvalidQNameLexeme(s.to_string());
    match s.split_once(':') {
        Some((p, l)) => {
            if !is_valid_ncname(p) || !is_valid_ncname(l) {
                return Err(invalid());
            }
            Ok((Some(p.to_string()), l.to_string()))
        }
        None => {
            if !is_valid_ncname(s) {
                return Err(invalid());
            }
            Ok((None, s.to_string()))
        }
    }
}

/// NCName production of Namespaces in XML 1.0 (a Name without `:`).
pub fn is_valid_ncname(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_name_start_char(first) && chars.all(is_name_char)
}

// XML 1.0 (fifth edition) NameStartChar, minus ':'.
fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}
