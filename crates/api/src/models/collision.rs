use super::member::MethodDescriptor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollisionError {
    #[error("collision set for `{0}` has no siblings")]
    Empty(String),
    #[error("method `{0}` was passed as its own sibling")]
    SelfSibling(String),
    #[error("sibling `{sibling}` does not collide with `{target}` on name and parameter types")]
    NotColliding { target: String, sibling: String },
}

/// A target method plus the other methods of its class that share its name
/// and erased parameter types.
///
/// Siblings are borrowed from the class they were found in, so identical
/// duplicates stay distinct and the target is recognised by address.
#[derive(Debug, Clone)]
pub struct CollisionSet<'a> {
    target: &'a MethodDescriptor,
    siblings: Vec<&'a MethodDescriptor>,
}

impl<'a> CollisionSet<'a> {
    pub fn new(
        target: &'a MethodDescriptor,
        siblings: Vec<&'a MethodDescriptor>,
    ) -> Result<Self, CollisionError> {
        if siblings.is_empty() {
            return Err(CollisionError::Empty(target.signature()));
        }
        for sibling in &siblings {
            if std::ptr::eq(*sibling, target) {
                return Err(CollisionError::SelfSibling(target.signature()));
            }
            if !sibling.collides_with(target) {
                return Err(CollisionError::NotColliding {
                    target: target.signature(),
                    sibling: sibling.signature(),
                });
            }
        }
        Ok(Self { target, siblings })
    }

    pub fn target(&self) -> &'a MethodDescriptor {
        self.target
    }

    pub fn siblings(&self) -> &[&'a MethodDescriptor] {
        &self.siblings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::{AccessCategory, ModifierSet};
    use crate::models::types::{PrimitiveKind, TypeDescriptor};

    fn method(name: &str) -> MethodDescriptor {
        MethodDescriptor {
            name: name.to_string(),
            parameter_types: vec![TypeDescriptor::Primitive(PrimitiveKind::Int)],
            return_type: PrimitiveKind::Void.into(),
            access: AccessCategory::Public,
            modifiers: ModifierSet::empty(),
            is_constructor: false,
        }
    }

    #[test]
    fn rejects_empty_sibling_list() {
        let target = method("a");
        assert!(matches!(
            CollisionSet::new(&target, vec![]),
            Err(CollisionError::Empty(_))
        ));
    }

    #[test]
    fn rejects_target_as_its_own_sibling() {
        let target = method("a");
        assert!(matches!(
            CollisionSet::new(&target, vec![&target]),
            Err(CollisionError::SelfSibling(_))
        ));
    }

    #[test]
    fn accepts_value_equal_but_distinct_sibling() {
        let target = method("a");
        let twin = method("a");
        let set = CollisionSet::new(&target, vec![&twin]).expect("valid set");
        assert_eq!(set.siblings().len(), 1);
    }

    #[test]
    fn rejects_non_colliding_sibling() {
        let target = method("a");
        let other = method("b");
        assert!(matches!(
            CollisionSet::new(&target, vec![&other]),
            Err(CollisionError::NotColliding { .. })
        ));
    }
}
