use super::test_utils::FakeClassSource;
use super::test_utils::defined;
use super::test_utils::plain;
use crate::directives::DirectiveMap;
use crate::directives::DirectiveRegistryError;
use crate::directives::DiscoveredDirective;
use crate::directives::GENERATED_NOTICE;
use crate::directives::SchemaDocument;
use crate::generate_directive_schema;

#[test]
fn empty_map_yields_only_the_notice() {
    let document = SchemaDocument::assemble(&DirectiveMap::new()).unwrap();

    assert_eq!(document.as_str(), GENERATED_NOTICE);
    assert_eq!(document.directive_count(), 0);
}

#[test]
fn notice_is_three_comment_lines() {
    assert_eq!(
        GENERATED_NOTICE.lines().collect::<Vec<_>>(),
        vec![
            "# File generated by \"graphql ide-helper\".",
            "# Do not edit this file directly.",
            "# This file should be ignored by git.",
        ],
    );
}

#[test]
fn defined_directive_block_is_byte_exact() {
    let mut directives = DirectiveMap::new();
    directives.insert("upper".to_string(), DiscoveredDirective::new(
        "App\\UpperDirective",
        defined("upper", "directive @upper on FIELD_DEFINITION"),
    ));

    let document = SchemaDocument::assemble(&directives).unwrap();

    assert_eq!(
        document.to_string(),
        format!(
            "{GENERATED_NOTICE}\
            \n\
            # Directive class: App\\UpperDirective\n\
            directive @upper on FIELD_DEFINITION\n",
        ),
    );
    assert_eq!(document.directive_count(), 1);
}

#[test]
fn blocks_follow_map_order_with_placeholders() {
    let mut directives = DirectiveMap::new();
    directives.insert("zeta".to_string(), DiscoveredDirective::new(
        "app::directives::ZetaDirective",
        plain("zeta"),
    ));
    directives.insert("alpha".to_string(), DiscoveredDirective::new(
        "app::directives::AlphaDirective",
        defined("alpha", "  directive @alpha on OBJECT\n"),
    ));

    let document = SchemaDocument::assemble(&directives).unwrap();

    assert_eq!(
        document.into_string(),
        format!(
            "{GENERATED_NOTICE}\
            \n\
            # Directive class: app::directives::ZetaDirective\n\
            # Add a proper definition by implementing libgraphql_directives::DefinedDirective\n\
            directive @zeta\n\
            \n\
            # Directive class: app::directives::AlphaDirective\n\
            directive @alpha on OBJECT\n",
        ),
    );
}

#[test]
fn invalid_definition_aborts_assembly() {
    let mut directives = DirectiveMap::new();
    directives.insert("upper".to_string(), DiscoveredDirective::new(
        "app::directives::UpperDirective",
        defined("upper", "directive @upper on FIELD_DEFINITION"),
    ));
    directives.insert("broken".to_string(), DiscoveredDirective::new(
        "app::directives::BrokenDirective",
        defined("broken", "scalar Broken"),
    ));

    let result = SchemaDocument::assemble(&directives);

    assert!(matches!(
        result,
        Err(DirectiveRegistryError::InvalidDirectiveDefinition { ref directive_name, .. })
            if directive_name == "broken",
    ));
}

#[test]
fn generates_document_across_namespaces() {
    let source = FakeClassSource::new()
        .with_defined(
            "app::directives",
            "app::directives::UpperDirective",
            "upper",
            "directive @upper on FIELD_DEFINITION",
        )
        .with_plain("vendor::directives", "vendor::directives::UpperDirective", "upper")
        .with_plain("vendor::directives", "vendor::directives::CacheDirective", "cache");

    let document = generate_directive_schema(
        &["app::directives", "empty::directives", "vendor::directives"],
        &source,
        &source,
    ).unwrap();

    assert_eq!(document.directive_count(), 2);
    assert_eq!(
        document.as_str(),
        format!(
            "{GENERATED_NOTICE}\
            \n\
            # Directive class: app::directives::UpperDirective\n\
            directive @upper on FIELD_DEFINITION\n\
            \n\
            # Directive class: vendor::directives::CacheDirective\n\
            # Add a proper definition by implementing libgraphql_directives::DefinedDirective\n\
            directive @cache\n",
        ),
    );
}
