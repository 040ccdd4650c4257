use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::OutputType;
use crate::types::ScalarType;

/// Represents a named GraphQL type known to a
/// [`TypeRegistry`](crate::types::TypeRegistry).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(OutputType),
    Object(OutputType),
    Scalar(ScalarType),
    String,
    Union(OutputType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Indicates if values of this type may appear in an input position
    /// (an argument, an input field, or a default value).
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
