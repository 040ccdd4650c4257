use crate::ast;
use crate::types::ExecutableType;
use crate::Value;

/// An executable description of one argument (or one input-object field),
/// produced by the [`ArgumentFactory`](crate::ArgumentFactory) from its AST
/// input-value definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDescriptor<'ast> {
    pub(super) ast_node: &'ast ast::schema::InputValue,
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_: ExecutableType,
}
impl<'ast> ArgumentDescriptor<'ast> {
    /// The input-value definition this descriptor was converted from.
    pub fn ast_node(&self) -> &'ast ast::schema::InputValue {
        self.ast_node
    }

    /// The coerced default value, present only when the definition declared
    /// one.
    ///
    /// Note that a default may legitimately be present for a non-null
    /// argument: it is coerced against the argument's type, so the only value
    /// it can never hold is `null`.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn position(&self) -> ast::Pos {
        self.ast_node.position
    }

    pub fn type_(&self) -> &ExecutableType {
        &self.type_
    }
}
