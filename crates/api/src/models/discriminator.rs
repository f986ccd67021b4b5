use super::member::{AccessCategory, MethodDescriptor, Modifier};
use serde::{Deserialize, Serialize};

/// A modifier flag together with the truth value the target has for it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifierPredicate {
    pub modifier: Modifier,
    pub expected: bool,
}

impl ModifierPredicate {
    pub fn of(method: &MethodDescriptor, modifier: Modifier) -> Self {
        Self {
            modifier,
            expected: method.modifiers.has(modifier),
        }
    }

    pub fn matches(&self, method: &MethodDescriptor) -> bool {
        method.modifiers.has(self.modifier) == self.expected
    }
}

/// What isolates a target method from the methods it collides with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiscriminatorResult {
    /// The target's access category is shared by no sibling.
    AccessUnique(AccessCategory),
    /// These modifier predicates, in emission order, match no sibling.
    ModifierCombination(Vec<ModifierPredicate>),
    /// Only the return type separates the target; holds its canonical expression.
    ReturnTypeUnique(String),
    /// Nothing tried isolates the target.
    NoDiscriminatorFound,
}

impl DiscriminatorResult {
    pub fn is_found(&self) -> bool {
        !matches!(self, DiscriminatorResult::NoDiscriminatorFound)
    }
}
