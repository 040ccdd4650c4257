use crate::ast;
use crate::types::GraphQLType;
use std::sync::Arc;

/// A resolved, possibly-wrapped type reference.
///
/// The wrapping order always mirrors the AST type reference it was resolved
/// from: `[Int]!` is `NonNull(List(Named(Int)))` while `[Int!]` is
/// `List(NonNull(Named(Int)))`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableType {
    List(Box<ExecutableType>),
    Named(Arc<GraphQLType>),
    NonNull(Box<ExecutableType>),
}
impl ExecutableType {
    pub fn list_of(inner: ExecutableType) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null_of(inner: ExecutableType) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Recursively unwrap list and non-null wrappers and return the named
    /// type at the core of this type.
    pub fn innermost_type(&self) -> &GraphQLType {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type(),
            Self::Named(type_) => type_,
        }
    }

    /// Indicates if this type is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }

    /// This type with a top-level non-null wrapper (if any) removed.
    pub fn nullable_type(&self) -> &ExecutableType {
        if let Self::NonNull(inner) = self {
            inner
        } else {
            self
        }
    }

    /// Re-derive the AST type reference that this type was resolved from.
    pub fn to_ast_type(&self) -> ast::schema::Type {
        match self {
            Self::List(inner) =>
                ast::schema::Type::ListType(Box::new(inner.to_ast_type())),
            Self::Named(type_) =>
                ast::schema::Type::NamedType(type_.name().to_string()),
            Self::NonNull(inner) =>
                ast::schema::Type::NonNullType(Box::new(inner.to_ast_type())),
        }
    }
}
impl std::fmt::Display for ExecutableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(type_) => write!(f, "{}", type_.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
