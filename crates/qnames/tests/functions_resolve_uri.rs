use rstest::rstest;
use xpath_qnames::model::simple::SimpleNode;
use xpath_qnames::{
    AnyUri, CallCtx, Error, ErrorCode, QNameFunction, ResolutionContext, ResolutionContextBuilder,
    XdmAtomicValue, XdmItem, XdmSequence,
};

type N = SimpleNode;

fn s(v: &str) -> XdmSequence<N> {
    vec![XdmItem::Atomic(XdmAtomicValue::String(v.to_string()))]
}

fn resolve(ctx: &ResolutionContext, args: &[XdmSequence<N>]) -> Result<XdmSequence<N>, Error> {
    QNameFunction::ResolveUri.call(&CallCtx::new(ctx), args)
}

fn any_uri(v: &str) -> XdmSequence<N> {
    vec![XdmItem::Atomic(XdmAtomicValue::AnyUri(v.to_string()))]
}

#[rstest]
#[case("a/b", "http://e/x/", "http://e/x/a/b")]
#[case("a/b", "http://e/x/y", "http://e/x/a/b")]
#[case("../c", "http://e/x/y/", "http://e/x/c")]
#[case("/root", "http://e/x/y", "http://e/root")]
#[case("?q=1", "http://e/x/y", "http://e/x/y?q=1")]
#[case("#frag", "http://e/x/y", "http://e/x/y#frag")]
#[case("urn:isbn:1", "http://e/x/", "urn:isbn:1")]
#[case("http://other/z", "http://e/x/", "http://other/z")]
fn resolves_against_explicit_base(#[case] rel: &str, #[case] base: &str, #[case] expected: &str) {
    let ctx = ResolutionContextBuilder::new().build();
    assert_eq!(resolve(&ctx, &[s(rel), s(base)]).unwrap(), any_uri(expected));
}

#[rstest]
fn uses_static_base_when_absent() {
    let ctx = ResolutionContextBuilder::new()
        .with_base_uri("http://ex/x/")
        .build();
    assert_eq!(resolve(&ctx, &[s("a/b")]).unwrap(), any_uri("http://ex/x/a/b"));
}

#[rstest]
fn without_any_base_returns_relative() {
    let ctx = ResolutionContextBuilder::new().build();
    assert_eq!(resolve(&ctx, &[s("a/b")]).unwrap(), any_uri("a/b"));
}

#[rstest]
fn empty_relative_yields_empty() {
    let ctx = ResolutionContextBuilder::new().build();
    assert!(resolve(&ctx, &[vec![], s("::also bad::")]).unwrap().is_empty());
    assert!(resolve(&ctx, &[vec![]]).unwrap().is_empty());
}

#[rstest]
#[case("::bad::")]
#[case("a b")]
#[case("100%")]
#[case("1http://x")]
fn invalid_relative(#[case] rel: &str) {
    let ctx = ResolutionContextBuilder::new()
        .with_base_uri("http://e/")
        .build();
    let err = resolve(&ctx, &[s(rel), s("http://e/x/")]).unwrap_err();
    assert_eq!(err, Error::InvalidUri(rel.to_string()));
    assert_eq!(err.code(), ErrorCode::FORG0002);
    let err = resolve(&ctx, &[s(rel)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FORG0002);
}

#[rstest]
fn invalid_base() {
    let ctx = ResolutionContextBuilder::new().build();
    let err = resolve(&ctx, &[s("a"), s("::bad::")]).unwrap_err();
    assert_eq!(err, Error::InvalidUri("::bad::".into()));
}

#[rstest]
fn accepts_any_uri_arguments() {
    let ctx = ResolutionContextBuilder::new().build();
    assert_eq!(
        resolve(&ctx, &[any_uri("x"), any_uri("http://e/a/")]).unwrap(),
        any_uri("http://e/a/x")
    );
}

#[rstest]
#[case("", true)]
#[case("a/b", true)]
#[case("http://e/x?y=1#z", true)]
#[case("caf%C3%A9", true)]
#[case("café", true)]
#[case("::bad::", false)]
#[case("a<b", false)]
#[case("%g1", false)]
fn any_uri_validity(#[case] text: &str, #[case] valid: bool) {
    assert_eq!(AnyUri::new(text).is_valid(), valid);
}

#[rstest]
fn any_uri_resolve_reports_relative() {
    let base = AnyUri::new("http://e/");
    assert_eq!(
        base.resolve(&AnyUri::new("a b")).unwrap_err(),
        Error::InvalidUri("a b".into())
    );
    assert_eq!(AnyUri::EMPTY.resolve(&"x".into()).unwrap(), AnyUri::new("x"));
}

#[rstest]
fn empty_base_argument_is_a_type_error() {
    let ctx = ResolutionContextBuilder::new()
        .with_base_uri("http://static/dir/")
        .build();
    let err = resolve(&ctx, &[s("a/b"), vec![]]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::XPTY0004);
}

#[rstest]
#[case("urn:x")]
#[case("mailto:someone@example.org")]
fn opaque_base_is_reported_as_offending_value(#[case] base: &str) {
    let ctx = ResolutionContextBuilder::new().build();
    let err = resolve(&ctx, &[s("a"), s(base)]).unwrap_err();
    assert_eq!(err, Error::InvalidUri(base.to_string()));
}
