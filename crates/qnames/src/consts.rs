/// Namespace permanently bound to the `xml` prefix.
pub const XML_URI: &str = "http://www.w3.org/XML/1998/namespace";
pub const XML_PREFIX: &str = "xml";
/// Standard function namespace (`fn:`).
pub const FNS: &str = "http://www.w3.org/2005/xpath-functions";
/// Namespace of the W3C error codes (`err:`).
pub const ERR_NS: &str = "http://www.w3.org/2005/xqt-errors";
