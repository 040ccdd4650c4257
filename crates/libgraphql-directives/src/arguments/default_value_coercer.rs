use crate::ArgumentFactory;
use crate::ast;
use crate::types::ExecutableType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeRegistry;
use crate::types::TypeResolveError;
use crate::Value;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, CoercionError>;

/// Coerces AST literals (as found in default-value positions) into native
/// [`Value`]s, following GraphQL's
/// [input coercion](https://spec.graphql.org/October2021/#sec-Input-Values)
/// rules for the target [`ExecutableType`].
pub struct DefaultValueCoercer<'factory, 'registry, TRegistry: TypeRegistry + ?Sized> {
    factory: &'factory ArgumentFactory<'registry, TRegistry>,
}
impl<'factory, 'registry, TRegistry: TypeRegistry + ?Sized>
    DefaultValueCoercer<'factory, 'registry, TRegistry>
{
    pub fn new(factory: &'factory ArgumentFactory<'registry, TRegistry>) -> Self {
        Self { factory }
    }

    pub fn coerce(
        &self,
        literal: &ast::schema::Value,
        type_: &ExecutableType,
    ) -> Result<Value> {
        self.coerce_impl(literal, type_, "", &mut vec![])
    }

    pub(super) fn coerce_impl(
        &self,
        literal: &ast::schema::Value,
        type_: &ExecutableType,
        path: &str,
        expanding_defaults: &mut Vec<String>,
    ) -> Result<Value> {
        if let ast::schema::Value::Variable(var_name) = literal {
            return Err(CoercionError::InvalidDefaultValue {
                path: path.to_string(),
                reason: format!(
                    "variable `${var_name}` can not be used in a default value",
                ),
            });
        }

        match (literal, type_) {
            (ast::schema::Value::Null, ExecutableType::NonNull(_)) =>
                Err(CoercionError::TypeMismatch {
                    expected_type: type_.to_string(),
                    found: literal_to_string(literal),
                    path: path.to_string(),
                }),

            (_, ExecutableType::NonNull(inner)) =>
                self.coerce_impl(literal, inner, path, expanding_defaults),

            (ast::schema::Value::Null, _) =>
                Ok(Value::Null),

            (ast::schema::Value::List(items), ExecutableType::List(inner)) => {
                let mut values = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    values.push(self.coerce_impl(
                        item,
                        inner,
                        &format!("{path}[{idx}]"),
                        expanding_defaults,
                    )?);
                }
                Ok(Value::List(values))
            },

            // A single value in a list position coerces to a list of one.
            //
            // https://spec.graphql.org/October2021/#sec-List.Input-Coercion
            (_, ExecutableType::List(inner)) =>
                Ok(Value::List(vec![
                    self.coerce_impl(literal, inner, path, expanding_defaults)?,
                ])),

            (_, ExecutableType::Named(named_type)) =>
                self.coerce_named(literal, named_type, path, expanding_defaults),
        }
    }

    fn coerce_named(
        &self,
        literal: &ast::schema::Value,
        named_type: &GraphQLType,
        path: &str,
        expanding_defaults: &mut Vec<String>,
    ) -> Result<Value> {
        if !named_type.is_input_type() {
            return Err(CoercionError::NonInputType {
                path: path.to_string(),
                type_name: named_type.name().to_string(),
            });
        }

        match (named_type, literal) {
            (GraphQLType::Int, ast::schema::Value::Int(num)) => {
                let value = num.as_i64().unwrap_or_default();
                if i32::try_from(value).is_err() {
                    return Err(CoercionError::IntOutOfRange {
                        path: path.to_string(),
                        value,
                    });
                }
                Ok(Value::Int(value))
            },

            (GraphQLType::Float, ast::schema::Value::Int(num)) =>
                Ok(Value::Float(num.as_i64().unwrap_or_default() as f64)),

            (GraphQLType::Float, ast::schema::Value::Float(num)) =>
                Ok(Value::Float(*num)),

            (GraphQLType::String, ast::schema::Value::String(str)) =>
                Ok(Value::String(str.to_string())),

            (GraphQLType::Bool, ast::schema::Value::Boolean(bool)) =>
                Ok(Value::Bool(*bool)),

            (GraphQLType::ID, ast::schema::Value::String(str)) =>
                Ok(Value::String(str.to_string())),

            (GraphQLType::ID, ast::schema::Value::Int(num)) =>
                Ok(Value::String(num.as_i64().unwrap_or_default().to_string())),

            // Custom scalars accept any literal as-is; interpreting it is up to
            // the scalar's implementation.
            (GraphQLType::Scalar(_), _) =>
                Value::from_ast_literal(literal).ok_or_else(|| {
                    CoercionError::InvalidDefaultValue {
                        path: path.to_string(),
                        reason: format!(
                            "variables can not be used in a default value: `{}`",
                            literal_to_string(literal),
                        ),
                    }
                }),

            (GraphQLType::Enum(enum_type), ast::schema::Value::Enum(value_name))
                if enum_type.has_value(value_name) =>
                Ok(Value::Enum(value_name.to_string())),

            (GraphQLType::InputObject(inputobj_type), ast::schema::Value::Object(fields)) =>
                self.coerce_input_object(inputobj_type, fields, path, expanding_defaults),

            (_, _) => Err(CoercionError::TypeMismatch {
                expected_type: named_type.name().to_string(),
                found: literal_to_string(literal),
                path: path.to_string(),
            }),
        }
    }

    fn coerce_input_object(
        &self,
        inputobj_type: &InputObjectType,
        provided_fields: &std::collections::BTreeMap<String, ast::schema::Value>,
        path: &str,
        expanding_defaults: &mut Vec<String>,
    ) -> Result<Value> {
        let type_name = inputobj_type.name();

        if let Some(unknown_field) = provided_fields.keys()
            .find(|field_name| inputobj_type.field(field_name).is_none()) {
            return Err(CoercionError::UnknownInputField {
                field_name: unknown_field.to_string(),
                path: path.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let mut values = IndexMap::new();
        for (field_name, field_def) in inputobj_type.fields() {
            let field_path =
                if path.is_empty() {
                    field_name.to_string()
                } else {
                    format!("{path}.{field_name}")
                };

            let field_type = self.factory.resolver()
                .resolve(&field_def.value_type)
                .map_err(|err| CoercionError::UnresolvableType {
                    path: field_path.to_owned(),
                    err,
                })?;

            if let Some(field_literal) = provided_fields.get(field_name) {
                values.insert(field_name.to_string(), self.coerce_impl(
                    field_literal,
                    &field_type,
                    &field_path,
                    expanding_defaults,
                )?);
                continue;
            }

            if field_def.default_value.is_some() {
                let field_coordinate = format!("{type_name}.{field_name}");
                if expanding_defaults.contains(&field_coordinate) {
                    return Err(CoercionError::CircularDefault {
                        field_coordinate,
                        path: field_path,
                    });
                }

                expanding_defaults.push(field_coordinate);
                let default_value = self.factory.coerce_default_value(
                    field_def,
                    &field_type,
                    expanding_defaults,
                );
                expanding_defaults.pop();

                if let Some(default_value) = default_value? {
                    values.insert(field_name.to_string(), default_value);
                }
                continue;
            }

            if !field_type.nullable() {
                return Err(CoercionError::MissingInputField {
                    field_name: field_name.to_string(),
                    path: path.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        Ok(Value::Object(values))
    }
}

/// Render an AST literal back into (approximately) its SDL form for use in
/// error messages.
fn literal_to_string(literal: &ast::schema::Value) -> String {
    match literal {
        ast::schema::Value::Variable(var_name) => format!("${var_name}"),
        ast::schema::Value::Int(num) =>
            num.as_i64().map(|n| n.to_string()).unwrap_or_default(),
        ast::schema::Value::Float(num) => num.to_string(),
        ast::schema::Value::String(str) => format!("{str:?}"),
        ast::schema::Value::Boolean(bool) => bool.to_string(),
        ast::schema::Value::Null => "null".to_string(),
        ast::schema::Value::Enum(value_name) => value_name.to_string(),
        ast::schema::Value::List(items) => format!(
            "[{}]",
            items.iter()
                .map(literal_to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ast::schema::Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(key, value)| format!("{key}: {}", literal_to_string(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error(
        "The default value of `{field_coordinate}` refers back to itself \
        (at `{}`)",
        display_path(path),
    )]
    CircularDefault {
        field_coordinate: String,
        path: String,
    },

    #[error("Int value {value} does not fit in a 32-bit signed integer (at `{}`)", display_path(path))]
    IntOutOfRange {
        path: String,
        value: i64,
    },

    #[error("Invalid default value at `{}`: {reason}", display_path(path))]
    InvalidDefaultValue {
        path: String,
        reason: String,
    },

    #[error(
        "Required field `{field_name}` of input type `{type_name}` was not \
        provided (at `{}`)",
        display_path(path),
    )]
    MissingInputField {
        field_name: String,
        path: String,
        type_name: String,
    },

    #[error(
        "`{type_name}` is an output type and can not hold a default value \
        (at `{}`)",
        display_path(path),
    )]
    NonInputType {
        path: String,
        type_name: String,
    },

    #[error(
        "Expected a value of type `{expected_type}`, but found `{found}` \
        (at `{}`)",
        display_path(path),
    )]
    TypeMismatch {
        expected_type: String,
        found: String,
        path: String,
    },

    #[error(
        "Input type `{type_name}` has no field named `{field_name}` (at `{}`)",
        display_path(path),
    )]
    UnknownInputField {
        field_name: String,
        path: String,
        type_name: String,
    },

    #[error("Unable to resolve the type at `{}`: {err}", display_path(path))]
    UnresolvableType {
        path: String,
        #[source]
        err: TypeResolveError,
    },
}
