use crate::directives::CollaboratorError;
use crate::directives::PartialParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectiveRegistryError {
    #[error("Failed to enumerate classes in namespace `{namespace}`: {err}")]
    ClassEnumeration {
        namespace: String,
        #[source]
        err: CollaboratorError,
    },

    #[error("Failed to instantiate directive class `{class_identifier}`: {err}")]
    Instantiation {
        class_identifier: String,
        #[source]
        err: CollaboratorError,
    },

    #[error("The definition declared for directive `@{directive_name}` is not valid SDL: {err}")]
    InvalidDirectiveDefinition {
        directive_name: String,
        definition: String,
        #[source]
        err: PartialParseError,
    },
}
