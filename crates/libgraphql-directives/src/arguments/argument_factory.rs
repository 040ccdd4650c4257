use crate::arguments::ArgumentDescriptor;
use crate::arguments::CoercionError;
use crate::arguments::DefaultValueCoercer;
use crate::ast;
use crate::types::ExecutableType;
use crate::types::TypeRegistry;
use crate::types::TypeResolveError;
use crate::types::TypeResolver;
use crate::Value;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ArgumentBuildError>;

/// How [`ArgumentFactory::to_type_map()`] treats two input values with the
/// same name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DuplicateArgumentPolicy {
    /// The later definition replaces the earlier one (which keeps its
    /// original position in the map).
    #[default]
    LastWins,

    /// Fail with [`ArgumentBuildError::DuplicateArgumentName`].
    Reject,
}

/// Converts AST input-value definitions (field arguments, directive
/// arguments, or input-object fields) into [`ArgumentDescriptor`]s.
///
/// Conversion resolves each definition's type against a [`TypeRegistry`]
/// and, when the definition declares a default value, coerces that literal
/// against the resolved type.
#[derive(Debug)]
pub struct ArgumentFactory<'registry, TRegistry: TypeRegistry + ?Sized> {
    duplicate_policy: DuplicateArgumentPolicy,
    resolver: TypeResolver<'registry, TRegistry>,
}
impl<'registry, TRegistry: TypeRegistry + ?Sized> ArgumentFactory<'registry, TRegistry> {
    pub fn new(registry: &'registry TRegistry) -> Self {
        Self {
            duplicate_policy: DuplicateArgumentPolicy::default(),
            resolver: TypeResolver::new(registry),
        }
    }

    /// Reject duplicate argument names instead of letting the last
    /// definition win.
    pub fn strict(self) -> Self {
        self.with_duplicate_policy(DuplicateArgumentPolicy::Reject)
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicateArgumentPolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicateArgumentPolicy {
        self.duplicate_policy
    }

    pub fn resolver(&self) -> &TypeResolver<'registry, TRegistry> {
        &self.resolver
    }

    /// Convert a set of input-value definitions into a map from argument name
    /// to [`ArgumentDescriptor`].
    ///
    /// The returned [`IndexMap`] preserves the order of `input_values`.
    pub fn to_type_map<'ast>(
        &self,
        input_values: impl IntoIterator<Item = &'ast ast::schema::InputValue>,
    ) -> Result<IndexMap<String, ArgumentDescriptor<'ast>>> {
        let mut arguments: IndexMap<String, ArgumentDescriptor<'ast>> = IndexMap::new();
        for input_value in input_values {
            if let Some(existing) = arguments.get(input_value.name.as_str()) {
                match self.duplicate_policy {
                    DuplicateArgumentPolicy::Reject =>
                        return Err(ArgumentBuildError::DuplicateArgumentName {
                            argument_name: input_value.name.to_string(),
                            position1: existing.position(),
                            position2: input_value.position,
                        }),

                    DuplicateArgumentPolicy::LastWins => log::warn!(
                        "Argument `{}` at {} redefines the argument at {}; \
                        keeping the later definition.",
                        input_value.name,
                        input_value.position,
                        existing.position(),
                    ),
                }
            }

            let argument = self.convert(input_value)?;
            arguments.insert(input_value.name.to_string(), argument);
        }
        Ok(arguments)
    }

    /// Convert a single input-value definition into an
    /// [`ArgumentDescriptor`].
    pub fn convert<'ast>(
        &self,
        input_value: &'ast ast::schema::InputValue,
    ) -> Result<ArgumentDescriptor<'ast>> {
        let type_ = self.resolver.resolve(&input_value.value_type)
            .map_err(|err| ArgumentBuildError::UnresolvableType {
                argument_name: input_value.name.to_string(),
                position: input_value.position,
                err,
            })?;

        let default_value =
            self.coerce_default_value(input_value, &type_, &mut vec![])
                .map_err(|err| ArgumentBuildError::DefaultValueCoercion {
                    argument_name: input_value.name.to_string(),
                    position: input_value.position,
                    err,
                })?;

        Ok(ArgumentDescriptor {
            ast_node: input_value,
            default_value,
            description: input_value.description.to_owned(),
            name: input_value.name.to_string(),
            type_,
        })
    }

    /// Coerce the default literal of `input_value` (if it has one) against its
    /// already-resolved type.
    ///
    /// This is shared between top-level argument conversion and the
    /// [`DefaultValueCoercer`] filling in omitted input-object fields.
    /// `expanding_defaults` holds the `Type.field` coordinates whose defaults
    /// are currently being expanded.
    pub(super) fn coerce_default_value(
        &self,
        input_value: &ast::schema::InputValue,
        type_: &ExecutableType,
        expanding_defaults: &mut Vec<String>,
    ) -> std::result::Result<Option<Value>, CoercionError> {
        let Some(literal) = input_value.default_value.as_ref() else {
            return Ok(None);
        };

        DefaultValueCoercer::new(self)
            .coerce_impl(literal, type_, "", expanding_defaults)
            .map(Some)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgumentBuildError {
    #[error("Invalid default value for argument `{argument_name}` at {position}: {err}")]
    DefaultValueCoercion {
        argument_name: String,
        position: ast::Pos,
        #[source]
        err: CoercionError,
    },

    #[error(
        "Multiple arguments named `{argument_name}` were defined (at \
        {position1} and {position2})"
    )]
    DuplicateArgumentName {
        argument_name: String,
        position1: ast::Pos,
        position2: ast::Pos,
    },

    #[error("Unable to resolve the type of argument `{argument_name}` at {position}: {err}")]
    UnresolvableType {
        argument_name: String,
        position: ast::Pos,
        #[source]
        err: TypeResolveError,
    },
}
