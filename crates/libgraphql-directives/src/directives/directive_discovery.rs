use crate::directives::DirectiveCapability;
use crate::directives::DirectiveImplementation;
use crate::directives::DirectiveRegistryError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, DirectiveRegistryError>;

/// An error reported by a host-provided collaborator.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Map from directive name to the implementation discovered for it, in
/// discovery order.
pub type DirectiveMap = IndexMap<String, DiscoveredDirective>;

/// What a [`ClassEnumerator`] knows about one candidate class without
/// instantiating it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassDescriptor {
    /// The directive capability the class implements, or [`None`] if it is
    /// not a directive at all.
    pub capability: Option<DirectiveCapability>,
    pub identifier: String,
    /// `false` for abstract/interface-like classes.
    pub instantiable: bool,
}
impl ClassDescriptor {
    pub fn directive(
        identifier: impl Into<String>,
        capability: DirectiveCapability,
    ) -> Self {
        Self {
            capability: Some(capability),
            identifier: identifier.into(),
            instantiable: true,
        }
    }
}

/// The result of enumerating one namespace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NamespaceClasses {
    Classes(Vec<ClassDescriptor>),

    /// The namespace holds no classes. This is an ordinary outcome: a host
    /// may configure namespaces that do not (yet) contain any directives.
    Empty,
}

/// Lists the candidate classes within a namespace.
pub trait ClassEnumerator {
    fn enumerate(
        &self,
        namespace: &str,
    ) -> std::result::Result<NamespaceClasses, CollaboratorError>;
}

/// Instantiates directive classes.
pub trait InstanceFactory {
    fn create(
        &self,
        class: &ClassDescriptor,
    ) -> std::result::Result<DirectiveImplementation, CollaboratorError>;
}

/// A directive implementation selected by [`DirectiveDiscovery`].
#[derive(Debug)]
pub struct DiscoveredDirective {
    class_identifier: String,
    implementation: DirectiveImplementation,
}
impl DiscoveredDirective {
    pub fn new(
        class_identifier: impl Into<String>,
        implementation: DirectiveImplementation,
    ) -> Self {
        Self {
            class_identifier: class_identifier.into(),
            implementation,
        }
    }

    pub fn class_identifier(&self) -> &str {
        self.class_identifier.as_str()
    }

    pub fn implementation(&self) -> &DirectiveImplementation {
        &self.implementation
    }
}

/// Finds directive implementations across an ordered list of namespaces.
pub struct DirectiveDiscovery<'a, TEnumerator, TFactory>
where
    TEnumerator: ClassEnumerator + ?Sized,
    TFactory: InstanceFactory + ?Sized,
{
    enumerator: &'a TEnumerator,
    factory: &'a TFactory,
}
impl<'a, TEnumerator, TFactory> DirectiveDiscovery<'a, TEnumerator, TFactory>
where
    TEnumerator: ClassEnumerator + ?Sized,
    TFactory: InstanceFactory + ?Sized,
{
    pub fn new(enumerator: &'a TEnumerator, factory: &'a TFactory) -> Self {
        Self {
            enumerator,
            factory,
        }
    }

    /// Build a fresh [`DirectiveMap`] from the classes in `namespaces`.
    ///
    /// Namespaces are visited in order and the first implementation found for
    /// a given directive name wins; later implementations with the same name
    /// are dropped. Classes that are not instantiable or that do not
    /// implement a directive capability are skipped.
    pub fn discover(&self, namespaces: &[impl AsRef<str>]) -> Result<DirectiveMap> {
        let mut directives = DirectiveMap::new();

        for namespace in namespaces {
            let namespace = namespace.as_ref();
            let classes = match self.enumerator.enumerate(namespace) {
                Ok(NamespaceClasses::Classes(classes)) => classes,

                Ok(NamespaceClasses::Empty) => {
                    log::debug!("No classes found in namespace `{namespace}`.");
                    continue;
                },

                Err(err) => return Err(DirectiveRegistryError::ClassEnumeration {
                    namespace: namespace.to_string(),
                    err,
                }),
            };

            log::debug!(
                "Scanning {} classes in namespace `{namespace}`...",
                classes.len(),
            );

            for class in &classes {
                if !class.instantiable {
                    log::trace!("Skipping non-instantiable class `{}`.", class.identifier);
                    continue;
                }

                if class.capability.is_none() {
                    log::trace!("Skipping non-directive class `{}`.", class.identifier);
                    continue;
                }

                let implementation = self.factory.create(class)
                    .map_err(|err| DirectiveRegistryError::Instantiation {
                        class_identifier: class.identifier.to_owned(),
                        err,
                    })?;
                let directive_name = implementation.name();

                if let Some(existing) = directives.get(directive_name.as_str()) {
                    log::debug!(
                        "Directive `@{directive_name}` from `{}` is shadowed by \
                        `{}`.",
                        class.identifier,
                        existing.class_identifier(),
                    );
                    continue;
                }

                log::trace!(
                    "Found directive `@{directive_name}` in `{}`.",
                    class.identifier,
                );
                directives.insert(directive_name, DiscoveredDirective::new(
                    class.identifier.to_owned(),
                    implementation,
                ));
            }
        }

        Ok(directives)
    }
}
