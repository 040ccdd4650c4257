use crate::ast;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: Vec<String>,
}
impl EnumType {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            values,
        }
    }

    pub(super) fn from_ast(def: &ast::schema::EnumType) -> Self {
        Self {
            description: def.description.to_owned(),
            name: def.name.to_string(),
            values: def.values.iter()
                .map(|value| value.name.to_string())
                .collect(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_value(&self, value_name: &str) -> bool {
        self.values.iter().any(|value| value == value_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The enum's value names in the order they were declared.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }
}
