use crate::ast;

/// A custom (non-builtin) scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
        }
    }

    pub(super) fn from_ast(def: &ast::schema::ScalarType) -> Self {
        Self {
            description: def.description.to_owned(),
            name: def.name.to_string(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
