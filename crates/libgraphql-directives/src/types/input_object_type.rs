use crate::ast;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input fields are kept as their original AST input-value nodes: they are
/// converted into [`ArgumentDescriptor`](crate::ArgumentDescriptor)s on demand
/// by the [`ArgumentFactory`](crate::ArgumentFactory), the same way field
/// arguments are.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, ast::schema::InputValue>,
    pub(super) name: String,
}
impl InputObjectType {
    pub(super) fn from_ast(def: &ast::schema::InputObjectType) -> Self {
        Self {
            description: def.description.to_owned(),
            fields: def.fields.iter()
                .map(|field| (field.name.to_string(), field.to_owned()))
                .collect(),
            name: def.name.to_string(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Option<&ast::schema::InputValue> {
        self.fields.get(field_name)
    }

    /// This type's input fields, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, ast::schema::InputValue> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
