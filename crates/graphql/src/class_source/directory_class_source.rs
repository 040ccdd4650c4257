use crate::class_source::FileDirective;
use anyhow::Context;
use libgraphql_directives::DirectiveImplementation;
use libgraphql_directives::directives::ClassDescriptor;
use libgraphql_directives::directives::ClassEnumerator;
use libgraphql_directives::directives::CollaboratorError;
use libgraphql_directives::directives::DirectiveCapability;
use libgraphql_directives::directives::InstanceFactory;
use libgraphql_directives::directives::NamespaceClasses;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

const DIRECTIVE_FILE_EXT: &str = "graphql";

/// Maps each namespace onto a directory and treats the `*.graphql` files
/// directly inside that directory as the namespace's classes.
///
/// * `_Foo.graphql` is a partial and is never instantiated.
/// * `FooDirective.graphql` is the directive `@foo`. A file with only
///   whitespace has no definition of its own; otherwise the file content is
///   the directive's definition.
/// * Any other file is not a directive.
#[derive(Clone, Debug)]
pub(crate) struct DirectoryClassSource {
    namespaces: Vec<(String, PathBuf)>,
}
impl DirectoryClassSource {
    pub(crate) fn new(namespaces: impl IntoIterator<Item = (String, PathBuf)>) -> Self {
        Self {
            namespaces: namespaces.into_iter().collect(),
        }
    }

    /// Namespace names in priority order.
    pub(crate) fn namespaces(&self) -> Vec<&str> {
        self.namespaces.iter()
            .map(|(namespace, _)| namespace.as_str())
            .collect()
    }

    fn namespace_dir(&self, namespace: &str) -> Option<&Path> {
        self.namespaces.iter()
            .find(|(name, _)| name == namespace)
            .map(|(_, dir)| dir.as_path())
    }

    fn describe(
        &self,
        namespace: &str,
        stem: &str,
        path: &Path,
    ) -> anyhow::Result<ClassDescriptor> {
        let identifier = format!("{namespace}::{stem}");
        let capability =
            if FileDirective::name_from_stem(stem).is_some() {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {path:#?}"))?;
                Some(capability_for(&content))
            } else {
                None
            };

        Ok(ClassDescriptor {
            capability,
            identifier,
            instantiable: !stem.starts_with('_'),
        })
    }

    fn enumerate_dir(
        &self,
        namespace: &str,
        dir: &Path,
    ) -> anyhow::Result<NamespaceClasses> {
        if !dir.exists() {
            log::debug!(
                "Directory {dir:#?} for namespace `{namespace}` does not exist.",
            );
            return Ok(NamespaceClasses::Empty);
        }

        let mut classes = vec![];
        let entries = WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry.with_context(|| format!(
                "Failed to list directory {dir:#?} for namespace `{namespace}`",
            ))?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }

            if path.extension().is_none_or(|ext| ext != DIRECTIVE_FILE_EXT) {
                log::trace!("Skipping non-graphql file: {path:#?}.");
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                log::warn!("Skipping file with a non-UTF-8 name: {path:#?}.");
                continue;
            };

            classes.push(self.describe(namespace, stem, path)?);
        }

        if classes.is_empty() {
            return Ok(NamespaceClasses::Empty);
        }
        Ok(NamespaceClasses::Classes(classes))
    }

    fn instantiate(&self, class: &ClassDescriptor) -> anyhow::Result<DirectiveImplementation> {
        let (namespace, stem) = class.identifier.rsplit_once("::")
            .with_context(|| format!("Malformed class identifier `{}`", class.identifier))?;
        let dir = self.namespace_dir(namespace)
            .with_context(|| format!("Unknown namespace `{namespace}`"))?;
        let directive_name = FileDirective::name_from_stem(stem)
            .with_context(|| format!("`{}` is not a directive class", class.identifier))?;

        let path = dir.join(format!("{stem}.{DIRECTIVE_FILE_EXT}"));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {path:#?}"))?;

        // The file may have changed since it was enumerated.
        let directive = FileDirective::new(directive_name, content.as_str());
        Ok(match capability_for(&content) {
            DirectiveCapability::Defined =>
                DirectiveImplementation::Defined(Box::new(directive)),
            DirectiveCapability::Plain =>
                DirectiveImplementation::Plain(Box::new(directive)),
        })
    }
}
impl ClassEnumerator for DirectoryClassSource {
    fn enumerate(&self, namespace: &str) -> Result<NamespaceClasses, CollaboratorError> {
        let Some(dir) = self.namespace_dir(namespace) else {
            log::debug!("No directory is configured for namespace `{namespace}`.");
            return Ok(NamespaceClasses::Empty);
        };

        Ok(self.enumerate_dir(namespace, dir)?)
    }
}
impl InstanceFactory for DirectoryClassSource {
    fn create(
        &self,
        class: &ClassDescriptor,
    ) -> Result<DirectiveImplementation, CollaboratorError> {
        Ok(self.instantiate(class)?)
    }
}

fn capability_for(content: &str) -> DirectiveCapability {
    if content.trim().is_empty() {
        DirectiveCapability::Plain
    } else {
        DirectiveCapability::Defined
    }
}
