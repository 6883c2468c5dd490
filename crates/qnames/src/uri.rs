//! `xs:anyURI` values: lexical validity checks and RFC 3986 reference
//! resolution (delegated to the `url` crate).
use crate::engine::runtime::Error;
use core::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AnyUri(String);

impl AnyUri {
    /// The "no URI" sentinel.
    pub const EMPTY: AnyUri = AnyUri(String::new());

    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the text is a well-formed absolute URI or relative reference.
    pub fn is_valid(&self) -> bool {
        let s = self.0.as_str();
        if s.is_empty() {
            return true;
        }
        if !s.chars().all(is_uri_char) || !percent_escapes_ok(s) {
            return false;
        }
        match scheme_part(s) {
            Some(scheme) => is_valid_scheme(scheme) && Url::parse(s).is_ok(),
            None => true,
        }
    }

    pub fn is_absolute(&self) -> bool {
        scheme_part(&self.0).is_some_and(is_valid_scheme)
    }

    /// Resolve `relative` against this URI as base.
    ///
    /// Absolute references are returned unchanged, as is any reference when
    /// the base is empty.
    pub fn resolve(&self, relative: &AnyUri) -> Result<AnyUri, Error> {
        if !relative.is_valid() {
            return Err(Error::InvalidUri(relative.0.clone()));
        }
        if relative.is_absolute() || self.is_empty() {
            return Ok(relative.clone());
        }
        let base = Url::parse(&self.0).map_err(|e| {
            tracing::debug!(base = %self.0, error = %e, "base URI is not absolute");
            Error::InvalidUri(self.0.clone())
        })?;
        let joined = base.join(&relative.0).map_err(|e| {
            tracing::debug!(base = %self.0, error = %e, "URI cannot serve as a base");
            Error::InvalidUri(self.0.clone())
        })?;
        Ok(AnyUri(joined.into()))
    }
}

impl fmt::Display for AnyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnyUri {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AnyUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Text before the first ':' if that colon precedes any '/', '?' or '#'.
fn scheme_part(s: &str) -> Option<&str> {
    let end = s.find([':', '/', '?', '#'])?;
    s[end..].starts_with(':').then(|| &s[..end])
}

fn is_valid_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// RFC 3986 unreserved + reserved + '%'; non-ASCII is accepted as IRI text.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
        )
        || (!c.is_ascii() && !c.is_whitespace() && !c.is_control())
}

fn percent_escapes_ok(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3);
            if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
