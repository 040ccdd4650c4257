/// An object, interface, or union type.
///
/// These types can only appear in output positions, so only their name is
/// needed for argument conversion (to report them as invalid argument
/// types).
#[derive(Clone, Debug, PartialEq)]
pub struct OutputType {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl OutputType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
        }
    }

    pub(super) fn with_description(
        name: &str,
        description: &Option<String>,
    ) -> Self {
        Self {
            description: description.to_owned(),
            name: name.to_string(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
