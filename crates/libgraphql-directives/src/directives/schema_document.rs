use crate::directives::DirectiveMap;
use crate::directives::DirectiveRegistryError;
use crate::directives::define;

type Result<T> = std::result::Result<T, DirectiveRegistryError>;

/// The fixed notice every generated schema-directives document starts with.
pub const GENERATED_NOTICE: &str = concat!(
    "# File generated by \"graphql ide-helper\".\n",
    "# Do not edit this file directly.\n",
    "# This file should be ignored by git.\n",
);

/// A generated reference document holding the SDL definition of every
/// discovered directive.
///
/// Directives appear in [`DirectiveMap`] iteration order (namespace order,
/// then enumeration order within each namespace); nothing is re-sorted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaDocument {
    content: String,
    directive_count: usize,
}
impl SchemaDocument {
    pub fn assemble(directives: &DirectiveMap) -> Result<Self> {
        let mut content = GENERATED_NOTICE.to_string();
        for (directive_name, discovered) in directives {
            let definition = define(directive_name, discovered.implementation())?;
            content.push('\n');
            content.push_str(&format!(
                "# Directive class: {}\n",
                discovered.class_identifier(),
            ));
            content.push_str(&definition);
            content.push('\n');
        }

        Ok(Self {
            content,
            directive_count: directives.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        self.content.as_str()
    }

    pub fn directive_count(&self) -> usize {
        self.directive_count
    }

    pub fn into_string(self) -> String {
        self.content
    }
}
impl std::fmt::Display for SchemaDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}
