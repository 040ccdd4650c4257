mod argument_descriptor;
mod argument_factory;
mod default_value_coercer;

pub use argument_descriptor::ArgumentDescriptor;
pub use argument_factory::ArgumentBuildError;
pub use argument_factory::ArgumentFactory;
pub use argument_factory::DuplicateArgumentPolicy;
pub use default_value_coercer::CoercionError;
pub use default_value_coercer::DefaultValueCoercer;
