use crate::directives::DirectiveImplementation;
use crate::directives::DirectiveRegistryError;
use crate::directives::PartialParser;

type Result<T> = std::result::Result<T, DirectiveRegistryError>;

/// The path of the trait a directive implements to declare its own SDL
/// definition. Referenced from placeholder definitions.
pub const DEFINED_DIRECTIVE_CAPABILITY: &str = "libgraphql_directives::DefinedDirective";

/// Produce the canonical SDL definition for one directive.
///
/// A self-declared definition must parse as exactly one directive
/// definition, and is returned with surrounding whitespace trimmed. An
/// implementation without one gets a placeholder: a comment pointing at
/// [`DEFINED_DIRECTIVE_CAPABILITY`] followed by a bare `directive @name`.
pub fn define(
    directive_name: &str,
    implementation: &DirectiveImplementation,
) -> Result<String> {
    let Some(definition) = implementation.definition() else {
        log::debug!(
            "Directive `@{directive_name}` declares no definition; emitting a \
            placeholder.",
        );
        return Ok(format!(
            "# Add a proper definition by implementing {DEFINED_DIRECTIVE_CAPABILITY}\n\
            directive @{directive_name}",
        ));
    };

    let directive_def = PartialParser::directive_definition(&definition)
        .map_err(|err| DirectiveRegistryError::InvalidDirectiveDefinition {
            directive_name: directive_name.to_string(),
            definition: definition.to_owned(),
            err,
        })?;

    if directive_def.name != directive_name {
        log::warn!(
            "Directive `@{directive_name}` declares a definition for \
            `@{}`.",
            directive_def.name,
        );
    }

    Ok(definition.trim().to_string())
}
