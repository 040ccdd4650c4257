use libgraphql_directives::DefinedDirective;
use libgraphql_directives::Directive;

/// A directive backed by a `*Directive.graphql` file on disk.
///
/// The file's stem names the directive and its content (if any) is the
/// directive's SDL definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileDirective {
    definition: String,
    name: String,
}
impl FileDirective {
    pub(crate) fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            name: name.into(),
        }
    }

    /// Derive a directive name from a file stem: the `Directive` suffix is
    /// dropped and the first character lowercased (`HasManyDirective` ->
    /// `hasMany`).
    ///
    /// Returns [`None`] for stems that do not name a directive.
    pub(crate) fn name_from_stem(stem: &str) -> Option<String> {
        let base_name = stem.strip_suffix("Directive")?;
        let mut chars = base_name.chars();
        let first_char = chars.next()?;
        Some(first_char.to_lowercase().chain(chars).collect())
    }
}
impl Directive for FileDirective {
    fn name(&self) -> String {
        self.name.to_string()
    }
}
impl DefinedDirective for FileDirective {
    fn definition(&self) -> String {
        self.definition.to_string()
    }
}
