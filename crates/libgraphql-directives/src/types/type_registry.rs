use crate::types::GraphQLType;
use std::sync::Arc;

/// A lookup-by-name source of [`GraphQLType`]s.
///
/// Registries are only ever read while converting types, so implementors
/// that are [`Sync`] can serve several schema-build passes at once.
pub trait TypeRegistry {
    fn lookup(&self, type_name: &str) -> Option<Arc<GraphQLType>>;
}
