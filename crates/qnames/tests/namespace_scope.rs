use rstest::{fixture, rstest};
use xpath_qnames::consts::XML_URI;
use xpath_qnames::model::simple::{SimpleNode, doc, elem, ns};
use xpath_qnames::{
    ResolutionContext, ResolutionContextBuilder, in_scope_namespaces, in_scope_prefixes,
    resolve_prefix,
};

/// `<outer xmlns:a="urn:outer-a" xmlns:b="urn:b" xmlns="urn:doc-default">
///    <inner xmlns:a="urn:inner-a" xmlns:c="urn:c"><leaf/></inner>
///  </outer>`
struct Tree {
    _doc: SimpleNode,
    outer: SimpleNode,
    inner: SimpleNode,
    leaf: SimpleNode,
}

#[fixture]
fn tree() -> Tree {
    let document = doc()
        .child(
            elem("outer")
                .namespace(ns("a", "urn:outer-a"))
                .namespace(ns("b", "urn:b"))
                .namespace(ns("", "urn:doc-default"))
                .child(
                    elem("inner")
                        .namespace(ns("a", "urn:inner-a"))
                        .namespace(ns("c", "urn:c"))
                        .child(elem("leaf")),
                ),
        )
        .build();
    let outer = document.children()[0].clone();
    let inner = outer.children()[0].clone();
    let leaf = inner.children()[0].clone();
    Tree {
        _doc: document,
        outer,
        inner,
        leaf,
    }
}

fn plain() -> ResolutionContext {
    ResolutionContextBuilder::new().build()
}

#[rstest]
fn xml_always_first_and_document_defaults_ignored(tree: Tree) {
    assert_eq!(in_scope_prefixes(&tree.outer, &plain()), vec!["xml", "a", "b"]);
}

#[rstest]
fn nearest_declaration_first(tree: Tree) {
    assert_eq!(
        in_scope_prefixes(&tree.leaf, &plain()),
        vec!["xml", "a", "c", "b"]
    );
}

#[rstest]
fn nearest_declaration_wins_for_uri(tree: Tree) {
    let ctx = plain();
    assert_eq!(
        resolve_prefix("a", &tree.leaf, &ctx).as_deref(),
        Some("urn:inner-a")
    );
    assert_eq!(
        resolve_prefix("a", &tree.outer, &ctx).as_deref(),
        Some("urn:outer-a")
    );
    assert_eq!(resolve_prefix("b", &tree.inner, &ctx).as_deref(), Some("urn:b"));
}

#[rstest]
fn static_default_contributes_empty_prefix(tree: Tree) {
    let ctx = ResolutionContextBuilder::new()
        .with_default_element_namespace("urn:static")
        .build();
    let prefixes = in_scope_prefixes(&tree.inner, &ctx);
    assert_eq!(prefixes, vec!["xml", "", "a", "c", "b"]);
    assert_eq!(resolve_prefix("", &tree.inner, &ctx).as_deref(), Some("urn:static"));
}

#[rstest]
fn empty_prefix_absent_without_default(tree: Tree) {
    let ctx = plain();
    assert!(!in_scope_prefixes(&tree.leaf, &ctx).contains(&String::new()));
    assert_eq!(resolve_prefix("", &tree.leaf, &ctx), None);
}

#[rstest]
fn empty_default_uri_means_unset(tree: Tree) {
    let ctx = ResolutionContextBuilder::new()
        .with_default_element_namespace("")
        .build();
    assert_eq!(ctx.default_element_namespace, None);
    assert!(!in_scope_prefixes(&tree.leaf, &ctx).contains(&String::new()));
}

#[rstest]
fn xml_prefix_resolves_to_fixed_uri(tree: Tree) {
    assert_eq!(
        resolve_prefix("xml", &tree.leaf, &plain()).as_deref(),
        Some(XML_URI)
    );
}

#[rstest]
fn undeclared_prefix_is_not_found(tree: Tree) {
    assert_eq!(resolve_prefix("zz", &tree.leaf, &plain()), None);
    // `c` is declared below `outer`, not visible there
    assert_eq!(resolve_prefix("c", &tree.outer, &plain()), None);
}

#[rstest]
fn query_table_overrides_document_uri(tree: Tree) {
    let ctx = ResolutionContextBuilder::new()
        .with_namespace("a", "urn:table-a")
        .build();
    assert_eq!(
        resolve_prefix("a", &tree.leaf, &ctx).as_deref(),
        Some("urn:table-a")
    );
    // table entries alone do not bring a prefix into scope
    let ctx = ResolutionContextBuilder::new()
        .with_namespace("q", "urn:q")
        .build();
    assert_eq!(resolve_prefix("q", &tree.leaf, &ctx), None);
}

#[rstest]
fn xml_prefix_cannot_be_rebound() {
    let ctx = ResolutionContextBuilder::new()
        .with_namespace("xml", "urn:not-xml")
        .build();
    assert_eq!(ctx.namespaces.uri("xml"), Some(XML_URI));
    let document = doc()
        .child(elem("r").namespace(ns("xml", "urn:not-xml")))
        .build();
    let r = document.children()[0].clone();
    let pairs = in_scope_namespaces(&r, &ctx);
    assert_eq!(pairs, vec![("xml".to_string(), XML_URI.to_string())]);
}

#[rstest]
fn document_defaults_when_enabled(tree: Tree) {
    let ctx = ResolutionContextBuilder::new()
        .with_default_element_namespace("urn:static")
        .with_document_default_namespaces(true)
        .build();
    assert_eq!(
        resolve_prefix("", &tree.leaf, &ctx).as_deref(),
        Some("urn:doc-default")
    );
}

#[rstest]
fn document_undeclaration_removes_empty_prefix() {
    let document = doc()
        .child(
            elem("r")
                .namespace(ns("", "urn:d"))
                .child(elem("c").namespace(ns("", ""))),
        )
        .build();
    let r = document.children()[0].clone();
    let c = r.children()[0].clone();
    let ctx = ResolutionContextBuilder::new()
        .with_default_element_namespace("urn:static")
        .with_document_default_namespaces(true)
        .build();
    assert_eq!(resolve_prefix("", &r, &ctx).as_deref(), Some("urn:d"));
    assert_eq!(resolve_prefix("", &c, &ctx), None);
    assert_eq!(in_scope_prefixes(&c, &ctx), vec!["xml"]);
}

#[rstest]
fn detached_element_only_sees_own_bindings() {
    let lone = elem("lone").namespace(ns("p", "urn:p")).build();
    assert_eq!(in_scope_prefixes(&lone, &plain()), vec!["xml", "p"]);
}

#[rstest]
fn prefixes_have_no_duplicates(tree: Tree) {
    let ctx = ResolutionContextBuilder::new()
        .with_default_element_namespace("urn:static")
        .build();
    let prefixes = in_scope_prefixes(&tree.leaf, &ctx);
    let mut sorted = prefixes.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), prefixes.len());
}
