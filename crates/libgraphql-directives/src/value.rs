use crate::ast;
use indexmap::IndexMap;

/// A native value produced by coercing an AST literal against an
/// [`ExecutableType`](crate::types::ExecutableType).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(values) = self {
            Some(values.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert a literal verbatim, with no type information to guide it.
    ///
    /// Returns [`None`] if a variable reference appears anywhere within the
    /// literal.
    pub(crate) fn from_ast_literal(ast_value: &ast::schema::Value) -> Option<Self> {
        Some(match ast_value {
            ast::schema::Value::Variable(_) => return None,

            ast::schema::Value::Int(value) =>
                Value::Int(value.as_i64()?),

            ast::schema::Value::Float(value) =>
                Value::Float(*value),

            ast::schema::Value::String(value) =>
                Value::String(value.clone()),

            ast::schema::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::schema::Value::Null =>
                Value::Null,

            ast::schema::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::schema::Value::List(values) =>
                Value::List(
                    values.iter()
                        .map(Value::from_ast_literal)
                        .collect::<Option<Vec<_>>>()?,
                ),

            ast::schema::Value::Object(entries) =>
                Value::Object(
                    entries.iter()
                        .map(|(key, ast_value)| {
                            Some((key.clone(), Value::from_ast_literal(ast_value)?))
                        })
                        .collect::<Option<IndexMap<_, _>>>()?,
                ),
        })
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}
