use crate::ast;
use crate::types::ExecutableType;
use crate::types::TypeRegistry;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeResolveError>;

/// Converts AST type references into [`ExecutableType`]s by looking up named
/// types in a [`TypeRegistry`].
#[derive(Debug)]
pub struct TypeResolver<'registry, TRegistry: TypeRegistry + ?Sized> {
    registry: &'registry TRegistry,
}
impl<'registry, TRegistry: TypeRegistry + ?Sized> TypeResolver<'registry, TRegistry> {
    pub fn new(registry: &'registry TRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'registry TRegistry {
        self.registry
    }

    pub fn resolve(&self, ast_type: &ast::schema::Type) -> Result<ExecutableType> {
        match ast_type {
            ast::schema::Type::NamedType(type_name) =>
                self.registry.lookup(type_name)
                    .map(ExecutableType::Named)
                    .ok_or_else(|| TypeResolveError::UnknownType {
                        type_name: type_name.to_string(),
                    }),

            ast::schema::Type::ListType(inner) =>
                Ok(ExecutableType::list_of(self.resolve(inner)?)),

            ast::schema::Type::NonNullType(inner) => {
                if let ast::schema::Type::NonNullType(_) = inner.as_ref() {
                    return Err(TypeResolveError::InvalidTypeShape {
                        type_ref: ast_type_to_string(ast_type),
                    });
                }
                Ok(ExecutableType::non_null_of(self.resolve(inner)?))
            },
        }
    }
}

fn ast_type_to_string(ast_type: &ast::schema::Type) -> String {
    match ast_type {
        ast::schema::Type::NamedType(type_name) => type_name.to_string(),
        ast::schema::Type::ListType(inner) =>
            format!("[{}]", ast_type_to_string(inner)),
        ast::schema::Type::NonNullType(inner) =>
            format!("{}!", ast_type_to_string(inner)),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeResolveError {
    #[error("Non-null types may not wrap another non-null type: `{type_ref}`")]
    InvalidTypeShape {
        type_ref: String,
    },

    #[error("Type `{type_name}` is not defined")]
    UnknownType {
        type_name: String,
    },
}
