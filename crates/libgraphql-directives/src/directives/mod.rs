mod directive;
mod directive_definition;
mod directive_discovery;
mod directive_registry_error;
mod partial_parser;
mod schema_document;

pub use directive::DefinedDirective;
pub use directive::Directive;
pub use directive::DirectiveCapability;
pub use directive::DirectiveImplementation;
pub use directive_definition::DEFINED_DIRECTIVE_CAPABILITY;
pub use directive_definition::define;
pub use directive_discovery::ClassDescriptor;
pub use directive_discovery::ClassEnumerator;
pub use directive_discovery::CollaboratorError;
pub use directive_discovery::DirectiveDiscovery;
pub use directive_discovery::DirectiveMap;
pub use directive_discovery::DiscoveredDirective;
pub use directive_discovery::InstanceFactory;
pub use directive_discovery::NamespaceClasses;
pub use directive_registry_error::DirectiveRegistryError;
pub use partial_parser::PartialParseError;
pub use partial_parser::PartialParser;
pub use schema_document::GENERATED_NOTICE;
pub use schema_document::SchemaDocument;

/// Discover every directive implementation in `namespaces` and assemble the
/// generated schema-directives reference document for them.
///
/// Earlier namespaces take priority when two implementations report the same
/// directive name.
pub fn generate_directive_schema<TEnumerator, TFactory>(
    namespaces: &[impl AsRef<str>],
    enumerator: &TEnumerator,
    factory: &TFactory,
) -> Result<SchemaDocument, DirectiveRegistryError>
where
    TEnumerator: ClassEnumerator + ?Sized,
    TFactory: InstanceFactory + ?Sized,
{
    let directives = DirectiveDiscovery::new(enumerator, factory)
        .discover(namespaces)?;
    SchemaDocument::assemble(&directives)
}

#[cfg(test)]
mod tests;
