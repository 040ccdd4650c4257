/// A schema directive implementation.
pub trait Directive {
    /// The name this directive is referenced by in a schema (without the
    /// leading `@`).
    fn name(&self) -> String;
}

/// A [`Directive`] that declares its own SDL definition, e.g.:
///
/// ```graphql
/// directive @upper on FIELD_DEFINITION
/// ```
pub trait DefinedDirective: Directive {
    fn definition(&self) -> String;
}

/// The capability a directive implementation provides, as reported by a
/// [`ClassEnumerator`](crate::directives::ClassEnumerator) before the
/// implementation is instantiated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveCapability {
    Defined,
    Plain,
}

/// An instantiated directive implementation, tagged by capability.
pub enum DirectiveImplementation {
    Defined(Box<dyn DefinedDirective>),
    Plain(Box<dyn Directive>),
}
impl DirectiveImplementation {
    pub fn capability(&self) -> DirectiveCapability {
        match self {
            Self::Defined(_) => DirectiveCapability::Defined,
            Self::Plain(_) => DirectiveCapability::Plain,
        }
    }

    /// The self-declared SDL definition, if this implementation has one.
    pub fn definition(&self) -> Option<String> {
        match self {
            Self::Defined(directive) => Some(directive.definition()),
            Self::Plain(_) => None,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Defined(directive) => directive.name(),
            Self::Plain(directive) => directive.name(),
        }
    }
}
impl std::fmt::Debug for DirectiveImplementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveImplementation")
            .field("capability", &self.capability())
            .field("name", &self.name())
            .finish()
    }
}
