use crate::ast;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::OutputType;
use crate::types::ScalarType;
use crate::types::TypeRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypesMapError>;

/// The stock [`TypeRegistry`]: a name-keyed map of [`GraphQLType`]s that
/// always includes GraphQL's builtin scalars.
#[derive(Clone, Debug)]
pub struct TypesMap {
    types: HashMap<String, Arc<GraphQLType>>,
}
impl TypesMap {
    pub fn new() -> Self {
        Self {
            types: HashMap::from([
                ("Boolean".to_string(), Arc::new(GraphQLType::Bool)),
                ("Float".to_string(), Arc::new(GraphQLType::Float)),
                ("ID".to_string(), Arc::new(GraphQLType::ID)),
                ("Int".to_string(), Arc::new(GraphQLType::Int)),
                ("String".to_string(), Arc::new(GraphQLType::String)),
            ]),
        }
    }

    /// Build a [`TypesMap`] from every named type defined in a schema
    /// document. Directive definitions, schema blocks and type extensions are
    /// ignored.
    pub fn from_sdl(content: &str) -> Result<Self> {
        let doc = ast::schema::parse(content)
            .map_err(|err| TypesMapError::ParseError(err.to_string()))?;

        let mut types_map = Self::new();
        for def in &doc.definitions {
            let ast::schema::Definition::TypeDefinition(type_def) = def else {
                log::trace!("Skipping non-type definition while loading types.");
                continue;
            };

            let (position, type_) = match type_def {
                ast::schema::TypeDefinition::Enum(def) =>
                    (def.position, GraphQLType::Enum(EnumType::from_ast(def))),

                ast::schema::TypeDefinition::InputObject(def) =>
                    (def.position, GraphQLType::InputObject(InputObjectType::from_ast(def))),

                ast::schema::TypeDefinition::Interface(def) =>
                    (def.position, GraphQLType::Interface(
                        OutputType::with_description(&def.name, &def.description),
                    )),

                ast::schema::TypeDefinition::Object(def) =>
                    (def.position, GraphQLType::Object(
                        OutputType::with_description(&def.name, &def.description),
                    )),

                ast::schema::TypeDefinition::Scalar(def) =>
                    (def.position, GraphQLType::Scalar(ScalarType::from_ast(def))),

                ast::schema::TypeDefinition::Union(def) =>
                    (def.position, GraphQLType::Union(
                        OutputType::with_description(&def.name, &def.description),
                    )),
            };

            types_map.add_type(type_).map_err(|err| match err {
                TypesMapError::DuplicateTypeDefinition { type_name, .. } =>
                    TypesMapError::DuplicateTypeDefinition {
                        type_name,
                        position: Some(position),
                    },
                TypesMapError::InvalidDunderPrefixedTypeName { type_name, .. } =>
                    TypesMapError::InvalidDunderPrefixedTypeName {
                        type_name,
                        position: Some(position),
                    },
                other => other,
            })?;
        }

        Ok(types_map)
    }

    pub fn add_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name();

        // https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
        if type_name.starts_with("__") {
            return Err(TypesMapError::InvalidDunderPrefixedTypeName {
                type_name: type_name.to_string(),
                position: None,
            });
        }

        if self.types.contains_key(type_name) {
            return Err(TypesMapError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                position: None,
            });
        }

        self.types.insert(type_name.to_string(), Arc::new(type_));
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name).map(Arc::as_ref)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}
impl std::default::Default for TypesMap {
    fn default() -> Self {
        Self::new()
    }
}
impl TypeRegistry for TypesMap {
    fn lookup(&self, type_name: &str) -> Option<Arc<GraphQLType>> {
        self.types.get(type_name).cloned()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypesMapError {
    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        position: Option<ast::Pos>,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
        position: Option<ast::Pos>,
    },

    #[error("Error parsing schema string: {0}")]
    ParseError(String),
}
