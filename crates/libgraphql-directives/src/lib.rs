pub mod arguments;
pub mod ast;
pub mod directives;
pub mod types;
mod value;

pub use arguments::ArgumentBuildError;
pub use arguments::ArgumentDescriptor;
pub use arguments::ArgumentFactory;
pub use directives::DefinedDirective;
pub use directives::Directive;
pub use directives::DirectiveImplementation;
pub use directives::generate_directive_schema;
pub use types::ExecutableType;
pub use types::GraphQLType;
pub use types::TypeRegistry;
pub use types::TypesMap;
pub use value::Value;
