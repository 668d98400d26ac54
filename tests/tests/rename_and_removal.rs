//! Declarations that change name, lose their name, or disappear.

use buildscript_tests::prelude::*;
use pretty_assertions::assert_eq;

fn document() -> Document {
    init_tracing();
    Document::new(SyncConfig::default()).unwrap()
}

#[test]
fn test_rename_leaves_no_old_class() {
    // GIVEN
    let mut script = Script::new("build")
        .macrodef("Foo", |m| m.attribute("Bar").element("Baz").sequential())
        .unwrap();
    let doc = document();
    let decl = script.decl("Foo");
    doc.clear_caches(&script.tree, decl);

    // WHEN
    script.tree.rename(decl, Some("Foo2")).unwrap();
    let class = doc.clear_caches(&script.tree, decl);

    // THEN
    assert_eq!(class, Some(ClassName::from("AntMacroDef[Foo2]")));
    Expect::absent("AntMacroDef[Foo]").verify(&doc).unwrap();
    Expect::absent("AntMacroDef[Foo]$Baz").verify(&doc).unwrap();
    Expect::registered("AntMacroDef[Foo2]")
        .attributes(&["bar"])
        .nested(&[("Baz", "AntMacroDef[Foo2]$Baz")])
        .in_scope(ScopeId::Container(script.project))
        .verify(&doc)
        .unwrap();
    assert_eq!(
        doc.scope_types(ScopeId::Container(script.project)),
        vec![(TypeKey::new("Foo2"), ClassName::from("AntMacroDef[Foo2]"))]
    );
}

#[test]
fn test_invalidate_after_rename_releases_old_class() {
    // GIVEN
    let mut script = Script::new("build")
        .macrodef("Foo", |m| m.attribute("Bar").element("Baz").sequential())
        .unwrap();
    let doc = document();
    let decl = script.decl("Foo");
    let sequential = script.macro_nodes("Foo").unwrap().sequential.unwrap();
    doc.invalidate(&script.tree, decl);

    // WHEN - rebuilt under the new name without a teardown first
    script.tree.rename(decl, Some("Foo2")).unwrap();
    doc.invalidate(&script.tree, decl);

    // THEN
    Expect::absent("AntMacroDef[Foo]").verify(&doc).unwrap();
    Expect::absent("AntMacroDef[Foo]$Baz").verify(&doc).unwrap();
    assert_eq!(
        doc.scope_types(ScopeId::Container(script.project)),
        vec![(TypeKey::new("Foo2"), ClassName::from("AntMacroDef[Foo2]"))]
    );

    // WHEN
    doc.teardown(decl);

    // THEN
    assert!(doc.snapshot().is_empty());
    assert!(doc.scope_types(ScopeId::Container(script.project)).is_empty());
    assert!(doc.scope_types(ScopeId::Container(sequential)).is_empty());
}

#[test]
fn test_invalidate_after_losing_the_name() {
    let mut script = Script::new("build")
        .macrodef("Foo", |m| m.element("Baz").sequential())
        .unwrap();
    let doc = document();
    let decl = script.decl("Foo");
    doc.invalidate(&script.tree, decl);

    script.tree.rename(decl, None).unwrap();

    assert_eq!(doc.invalidate(&script.tree, decl), None);
    assert!(doc.snapshot().is_empty());
    assert!(doc.declarations().is_empty());
}

#[test]
fn test_losing_the_name_unregisters() {
    // GIVEN
    let mut script = Script::new("build")
        .macrodef("Foo", |m| m.element("Baz"))
        .unwrap();
    let doc = document();
    let decl = script.decl("Foo");
    doc.clear_caches(&script.tree, decl);

    // WHEN
    script.tree.rename(decl, Some("   ")).unwrap();
    let class = doc.clear_caches(&script.tree, decl);

    // THEN
    assert_eq!(class, None);
    assert!(doc.snapshot().is_empty());
    assert!(doc.declarations().is_empty());
}

#[test]
fn test_nameless_declaration_never_registers() {
    let mut script = Script::new("build");
    let project = script.project;
    let nodes = script
        .add_macro(project, None, MacroBuilder::default().attribute("a").element("b"))
        .unwrap();
    let doc = document();

    assert_eq!(doc.clear_caches(&script.tree, nodes.node), None);
    assert!(doc.snapshot().is_empty());
}

#[test]
fn test_removed_declaration() {
    // GIVEN
    let mut script = Script::new("build")
        .macrodef("Foo", |m| m.element("Baz").sequential())
        .unwrap()
        .macrodef("Other", |m| m.attribute("x"))
        .unwrap();
    let doc = document();
    doc.refresh_all(&script.tree, &script.declarations());

    // WHEN
    let decl = script.decl("Foo");
    script.tree.remove(decl).unwrap();
    doc.remove_declaration(decl);

    // THEN
    assert_eq!(
        doc.snapshot().class_names(),
        vec![ClassName::from("AntMacroDef[Other]")]
    );
    assert_eq!(doc.declarations(), vec![script.decl("Other")]);
}

#[test]
fn test_refresh_all_swapping_names() {
    // GIVEN
    let mut script = Script::new("build")
        .macrodef("A", |m| m.attribute("first"))
        .unwrap()
        .macrodef("B", |m| m.attribute("second"))
        .unwrap();
    let doc = document();
    let (a, b) = (script.decl("A"), script.decl("B"));
    doc.refresh_all(&script.tree, &script.declarations());

    // WHEN - the two declarations swap names
    script.tree.rename(a, Some("B")).unwrap();
    script.tree.rename(b, Some("A")).unwrap();
    doc.refresh_all(&script.tree, &script.declarations());

    // THEN
    Expect::registered("AntMacroDef[A]")
        .attributes(&["second"])
        .verify(&doc)
        .unwrap();
    Expect::registered("AntMacroDef[B]")
        .attributes(&["first"])
        .verify(&doc)
        .unwrap();
    assert_eq!(
        doc.macro_definition(a).and_then(|d| d.defining_node),
        Some(a)
    );
}

#[test]
fn test_generation_tracks_cache_clears() {
    let script = Script::new("build")
        .macrodef("Foo", |m| m.attribute("x"))
        .unwrap()
        .macrodef("Bar", |m| m.attribute("y"))
        .unwrap();
    let doc = document();

    doc.clear_caches(&script.tree, script.decl("Foo"));
    doc.clear_caches(&script.tree, script.decl("Bar"));
    doc.refresh_all(&script.tree, &script.declarations());

    assert_eq!(doc.generation(), 4);
}

#[test]
fn test_duplicate_names_share_one_class() {
    // GIVEN - two declarations with the same name
    let mut script = Script::new("build")
        .macrodef("Foo", |m| m.attribute("first"))
        .unwrap();
    let project = script.project;
    let second = script
        .add_macro(project, Some("Foo"), MacroBuilder::default().attribute("second"))
        .unwrap();
    let doc = document();
    let first = script.decl("Foo");

    // WHEN
    doc.clear_caches(&script.tree, first);
    doc.clear_caches(&script.tree, second.node);

    // THEN - one live descriptor, defined by the last rebuild
    assert_eq!(doc.snapshot().len(), 1);
    Expect::registered("AntMacroDef[Foo]")
        .attributes(&["second"])
        .verify(&doc)
        .unwrap();
    assert_eq!(
        doc.macro_definition(first).and_then(|d| d.defining_node),
        Some(second.node)
    );
}
