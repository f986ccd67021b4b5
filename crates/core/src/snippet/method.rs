use super::{escape_kotlin_string, filters};
use crate::disambiguation;
use crate::error::Result;
use crate::options::CodegenOptions;
use hookgen_api::models::{ClassDescriptor, CollisionSet, DiscriminatorResult, MethodDescriptor};
use tracing::info;

const HOOK_BODY: &str = "\n    .first().createHook {\n        before {\n            \n        }\n    }";

/// Run the engine for `method` when it collides with other methods of `class`.
///
/// Returns `None` for constructors and for methods without collisions.
pub fn discriminate(
    class: &ClassDescriptor,
    method: &MethodDescriptor,
    options: &CodegenOptions,
) -> Result<Option<DiscriminatorResult>> {
    if method.is_constructor {
        return Ok(None);
    }
    let siblings = class.collisions_of(method);
    if siblings.is_empty() {
        return Ok(None);
    }
    let collisions = CollisionSet::new(method, siblings)?;
    Ok(Some(disambiguation::disambiguate(
        &collisions,
        &options.disambiguation(),
    )))
}

pub fn method_snippet(
    class: &ClassDescriptor,
    method: &MethodDescriptor,
    options: &CodegenOptions,
) -> Result<String> {
    let finder = if method.is_constructor {
        "ConstructorFinder"
    } else {
        "MethodFinder"
    };

    let mut chain = String::new();
    if !method.is_constructor {
        chain.push_str(&method_part(class, method, options)?);
    }
    chain.push_str(&params_part(class, method, options));

    Ok(format!(
        "{}.fromClass(\"{}\"){}{}",
        finder,
        escape_kotlin_string(&class.raw_name),
        chain,
        HOOK_BODY
    ))
}

fn method_part(
    class: &ClassDescriptor,
    method: &MethodDescriptor,
    options: &CodegenOptions,
) -> Result<String> {
    let mut part = String::new();
    if options.debug {
        part.push_str(&filters::comment(&method.signature()));
    }
    if options.force_access_filter {
        part.push_str(&filters::full_access_filter(method));
    }
    part.push_str(&filters::name_filter(&method.name));

    let Some(result) = discriminate(class, method, options)? else {
        return Ok(part);
    };
    info!(
        "{} collides with other methods in {}, discriminator: {:?}",
        method.signature(),
        class.raw_name,
        result
    );

    if options.debug {
        part.push_str(&filters::comment(
            "Found methods with duplicate names and parameter types",
        ));
        part.push_str(&filters::comment("1. Try checking access flag"));
    }

    match &result {
        DiscriminatorResult::AccessUnique(_) if options.force_access_filter => {}
        DiscriminatorResult::ModifierCombination(predicates) if options.force_access_filter => {
            // The full filter already covers every modifier the target carries.
            let negatives: Vec<_> = predicates.iter().copied().filter(|p| !p.expected).collect();
            part.push_str(&filters::modifier_filters(&negatives));
        }
        DiscriminatorResult::AccessUnique(_) | DiscriminatorResult::ModifierCombination(_) => {
            part.push_str(&filters::discriminator_fragment(&result));
        }
        DiscriminatorResult::ReturnTypeUnique(_) | DiscriminatorResult::NoDiscriminatorFound => {
            if options.debug {
                part.push_str(&filters::comment("2. Try checking the return type"));
            }
            let emitted_later = matches!(result, DiscriminatorResult::ReturnTypeUnique(_))
                && options.force_return_type_filter;
            if !emitted_later {
                part.push_str(&filters::discriminator_fragment(&result));
            }
        }
    }
    Ok(part)
}

fn params_part(class: &ClassDescriptor, method: &MethodDescriptor, options: &CodegenOptions) -> String {
    let mut part = if method.parameter_types.is_empty() {
        // Without a parameter filter another same-name overload could match.
        if class.has_other_same_name_method(method) {
            filters::param_count_filter(0)
        } else {
            String::new()
        }
    } else {
        filters::param_types_filter(&method.parameter_types, options.class_optimization)
    };

    if options.force_return_type_filter && !method.is_constructor {
        part.push_str(&filters::return_type_filter(
            &method.return_type,
            options.class_optimization,
        ));
    }
    part
}
