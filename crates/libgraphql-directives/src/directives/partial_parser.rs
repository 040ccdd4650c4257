use crate::ast;
use thiserror::Error;

type Result<T> = std::result::Result<T, PartialParseError>;

/// Parses standalone fragments of SDL that are expected to hold exactly one
/// definition of a particular kind.
pub struct PartialParser;
impl PartialParser {
    pub fn directive_definition(
        content: &str,
    ) -> Result<ast::schema::DirectiveDefinition> {
        let doc = ast::schema::parse(content)
            .map_err(|err| PartialParseError::ParseError(err.to_string()))?;

        let num_defs = doc.definitions.len();
        if num_defs != 1 {
            return Err(PartialParseError::UnexpectedDefinitionCount {
                expected: 1,
                found: num_defs,
            });
        }

        match doc.definitions.into_iter().next() {
            Some(ast::schema::Definition::DirectiveDefinition(def)) => Ok(def),
            Some(other_def) => Err(PartialParseError::UnexpectedDefinitionKind {
                expected: "directive definition",
                found: definition_kind(&other_def),
            }),
            None => Err(PartialParseError::UnexpectedDefinitionCount {
                expected: 1,
                found: 0,
            }),
        }
    }
}

fn definition_kind(def: &ast::schema::Definition) -> &'static str {
    match def {
        ast::schema::Definition::DirectiveDefinition(_) => "directive definition",
        ast::schema::Definition::SchemaDefinition(_) => "schema definition",
        ast::schema::Definition::TypeDefinition(_) => "type definition",
        ast::schema::Definition::TypeExtension(_) => "type extension",
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PartialParseError {
    #[error("Error parsing SDL fragment: {0}")]
    ParseError(String),

    #[error("Expected {expected} definition(s) in the SDL fragment, but found {found}")]
    UnexpectedDefinitionCount {
        expected: usize,
        found: usize,
    },

    #[error("Expected a {expected} in the SDL fragment, but found a {found}")]
    UnexpectedDefinitionKind {
        expected: &'static str,
        found: &'static str,
    },
}
