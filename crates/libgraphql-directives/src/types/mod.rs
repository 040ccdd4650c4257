mod enum_type;
mod executable_type;
mod graphql_type;
mod input_object_type;
mod output_type;
mod scalar_type;
mod type_registry;
mod type_resolver;
mod types_map;

pub use enum_type::EnumType;
pub use executable_type::ExecutableType;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputObjectType;
pub use output_type::OutputType;
pub use scalar_type::ScalarType;
pub use type_registry::TypeRegistry;
pub use type_resolver::TypeResolveError;
pub use type_resolver::TypeResolver;
pub use types_map::TypesMap;
pub use types_map::TypesMapError;

#[cfg(test)]
mod tests;
