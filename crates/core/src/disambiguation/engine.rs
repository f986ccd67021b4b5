use super::combinations;
use crate::canonical;
use hookgen_api::models::{
    AccessCategory, CollisionSet, DiscriminatorResult, MethodDescriptor, Modifier,
    ModifierPredicate,
};
use tracing::debug;

/// Inputs the engine reads besides the collision set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisambiguationOptions {
    /// Passed to the canonicalizer when the return type is the discriminator.
    pub optimize_class_loading: bool,
}

impl Default for DisambiguationOptions {
    fn default() -> Self {
        Self {
            optimize_class_loading: true,
        }
    }
}

/// Find the smallest deterministic predicate set that isolates the target.
///
/// Tries, in order: the access category, modifier combinations of size 1
/// through 5, then the return type. Each step short-circuits on success.
pub fn disambiguate(
    collisions: &CollisionSet<'_>,
    options: &DisambiguationOptions,
) -> DiscriminatorResult {
    let target = collisions.target();
    let siblings = collisions.siblings();
    debug!(
        "Disambiguating {} against {} sibling(s)",
        target.signature(),
        siblings.len()
    );

    if let Some(category) = unique_access(target, siblings) {
        debug!("Got unique access: {:?}", category);
        return DiscriminatorResult::AccessUnique(category);
    }

    if let Some(predicates) = unique_modifier_combination(target, siblings) {
        debug!("Got unique modifiers: {:?}", predicates);
        return DiscriminatorResult::ModifierCombination(predicates);
    }

    if has_unique_return_type(target, siblings) {
        let expression = canonical::canonicalize(&target.return_type, options.optimize_class_loading);
        debug!("Got unique return type: {}", expression);
        return DiscriminatorResult::ReturnTypeUnique(expression);
    }

    debug!("No discriminator found for {}", target.signature());
    DiscriminatorResult::NoDiscriminatorFound
}

pub fn unique_access(
    target: &MethodDescriptor,
    siblings: &[&MethodDescriptor],
) -> Option<AccessCategory> {
    AccessCategory::ALL.into_iter().find(|&category| {
        debug!("Check access: {:?}", category);
        target.access == category && siblings.iter().all(|s| s.access != category)
    })
}

pub fn unique_modifier_combination(
    target: &MethodDescriptor,
    siblings: &[&MethodDescriptor],
) -> Option<Vec<ModifierPredicate>> {
    combinations::by_increasing_size(&Modifier::ALL)
        .map(|combination| {
            combination
                .into_iter()
                .map(|modifier| ModifierPredicate::of(target, modifier))
                .collect::<Vec<_>>()
        })
        .find(|predicates| {
            debug!("Check modifiers: {:?}", predicates);
            !siblings.iter().any(|s| matches_all(predicates, s))
        })
}

pub fn has_unique_return_type(target: &MethodDescriptor, siblings: &[&MethodDescriptor]) -> bool {
    siblings.iter().all(|s| s.return_type != target.return_type)
}

/// True when `method` satisfies every predicate.
pub fn matches_all(predicates: &[ModifierPredicate], method: &MethodDescriptor) -> bool {
    predicates.iter().all(|p| p.matches(method))
}
