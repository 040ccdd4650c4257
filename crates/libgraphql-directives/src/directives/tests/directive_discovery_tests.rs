use super::test_utils::FakeClassSource;
use crate::directives::DirectiveCapability;
use crate::directives::DirectiveDiscovery;
use crate::directives::DirectiveRegistryError;

const APP: &str = "app::directives";
const VENDOR: &str = "vendor::directives";

#[test]
fn earlier_namespace_wins_name_collisions() {
    let source = FakeClassSource::new()
        .with_defined(APP, "app::directives::UpperDirective", "upper", "directive @upper on FIELD_DEFINITION")
        .with_plain(VENDOR, "vendor::directives::UpperDirective", "upper")
        .with_plain(VENDOR, "vendor::directives::LowerDirective", "lower");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&[APP, VENDOR])
        .unwrap();

    assert_eq!(directives.keys().collect::<Vec<_>>(), vec!["upper", "lower"]);
    assert_eq!(
        directives["upper"].class_identifier(),
        "app::directives::UpperDirective",
    );
    assert_eq!(
        directives["upper"].implementation().capability(),
        DirectiveCapability::Defined,
    );
    assert_eq!(
        directives["lower"].class_identifier(),
        "vendor::directives::LowerDirective",
    );
}

#[test]
fn namespace_order_decides_priority() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::UpperDirective", "upper")
        .with_plain(VENDOR, "vendor::directives::UpperDirective", "upper");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&[VENDOR, APP])
        .unwrap();

    assert_eq!(directives.len(), 1);
    assert_eq!(
        directives["upper"].class_identifier(),
        "vendor::directives::UpperDirective",
    );
}

#[test]
fn enumeration_order_within_namespace_is_preserved() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::ZetaDirective", "zeta")
        .with_plain(APP, "app::directives::AlphaDirective", "alpha")
        .with_plain(APP, "app::directives::MuDirective", "mu");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&[APP])
        .unwrap();

    assert_eq!(
        directives.keys().collect::<Vec<_>>(),
        vec!["zeta", "alpha", "mu"],
    );
}

#[test]
fn first_class_wins_collisions_within_one_namespace() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::CacheDirective", "cache")
        .with_plain(APP, "app::directives::LegacyCacheDirective", "cache");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&[APP])
        .unwrap();

    assert_eq!(
        directives["cache"].class_identifier(),
        "app::directives::CacheDirective",
    );
}

#[test]
fn empty_namespaces_are_skipped() {
    let source = FakeClassSource::new()
        .with_plain(VENDOR, "vendor::directives::LowerDirective", "lower");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&["app::missing", VENDOR, "other::missing"])
        .unwrap();

    assert_eq!(directives.keys().collect::<Vec<_>>(), vec!["lower"]);
}

#[test]
fn no_namespaces_discovers_nothing() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::UpperDirective", "upper");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&[] as &[&str])
        .unwrap();

    assert!(directives.is_empty());
    assert!(source.created().is_empty());
}

#[test]
fn enumeration_failure_propagates() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::UpperDirective", "upper")
        .with_failing_namespace(VENDOR);

    let result = DirectiveDiscovery::new(&source, &source)
        .discover(&[APP, VENDOR]);

    match result {
        Err(DirectiveRegistryError::ClassEnumeration { namespace, err }) => {
            assert_eq!(namespace, VENDOR);
            assert_eq!(
                err.to_string(),
                "namespace `vendor::directives` could not be read",
            );
        },
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn non_instantiable_and_non_directive_classes_are_skipped() {
    let source = FakeClassSource::new()
        .with_abstract(APP, "app::directives::BaseDirective", "base")
        .with_non_directive(APP, "app::directives::Helpers")
        .with_plain(APP, "app::directives::UpperDirective", "upper");

    let directives = DirectiveDiscovery::new(&source, &source)
        .discover(&[APP])
        .unwrap();

    assert_eq!(directives.keys().collect::<Vec<_>>(), vec!["upper"]);
    assert_eq!(source.created(), vec!["app::directives::UpperDirective"]);
}

#[test]
fn instantiation_failure_propagates() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::UpperDirective", "upper")
        .with_broken(APP, "app::directives::BrokenDirective", "broken");

    let result = DirectiveDiscovery::new(&source, &source)
        .discover(&[APP]);

    assert!(matches!(
        result,
        Err(DirectiveRegistryError::Instantiation { ref class_identifier, .. })
            if class_identifier == "app::directives::BrokenDirective",
    ));
}

#[test]
fn each_discovery_builds_a_fresh_map() {
    let source = FakeClassSource::new()
        .with_plain(APP, "app::directives::UpperDirective", "upper")
        .with_plain(VENDOR, "vendor::directives::LowerDirective", "lower");
    let discovery = DirectiveDiscovery::new(&source, &source);

    let first = discovery.discover(&[APP, VENDOR]).unwrap();
    let second = discovery.discover(&[VENDOR]).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.keys().collect::<Vec<_>>(), vec!["lower"]);
}
