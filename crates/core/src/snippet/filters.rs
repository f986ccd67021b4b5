//! Text fragments of the EzXHelper finder chain.
//!
//! Every fragment starts on a new line indented under the finder call.

use crate::canonical;
use hookgen_api::models::{
    AccessCategory, DiscriminatorResult, MethodDescriptor, Modifier, ModifierPredicate,
    TypeDescriptor,
};

pub const INDENT: &str = "\n    ";
pub const CONTINUATION_INDENT: &str = "\n        ";

/// Longest first line of a parameter type list, measured from the first type.
pub const FIRST_LINE_LIMIT: usize = 45;
/// Longest continuation line of a parameter type list.
pub const LINE_LIMIT: usize = 75;

pub const AMBIGUITY_WARNING: &str = "Warning: Failed to retrieve unique condition for this method.";

pub fn call(name: &str, args: &str) -> String {
    format!("{}.{}({})", INDENT, name, args)
}

pub fn comment(text: &str) -> String {
    format!("{}// {}", INDENT, text)
}

pub fn access_filter_name(category: AccessCategory) -> &'static str {
    match category {
        AccessCategory::Public => "filterPublic",
        AccessCategory::Private => "filterPrivate",
        AccessCategory::Protected => "filterProtected",
        AccessCategory::PackagePrivate => "filterPackagePrivate",
    }
}

pub fn modifier_filter_name(predicate: ModifierPredicate) -> &'static str {
    match (predicate.modifier, predicate.expected) {
        (Modifier::Static, true) => "filterStatic",
        (Modifier::Static, false) => "filterNonStatic",
        (Modifier::Final, true) => "filterFinal",
        (Modifier::Final, false) => "filterNonFinal",
        (Modifier::Abstract, true) => "filterAbstract",
        (Modifier::Abstract, false) => "filterNonAbstract",
        (Modifier::Native, true) => "filterNative",
        (Modifier::Native, false) => "filterNonNative",
        (Modifier::VarArgs, true) => "filterVarargs",
        (Modifier::VarArgs, false) => "filterNonVarargs",
    }
}

pub fn modifier_filters(predicates: &[ModifierPredicate]) -> String {
    predicates
        .iter()
        .map(|p| call(modifier_filter_name(*p), ""))
        .collect()
}

/// Access filter plus one filter per modifier the method carries.
pub fn full_access_filter(method: &MethodDescriptor) -> String {
    let mut out = call(access_filter_name(method.access), "");
    for modifier in method.modifiers.modifiers() {
        out.push_str(&call(
            modifier_filter_name(ModifierPredicate {
                modifier,
                expected: true,
            }),
            "",
        ));
    }
    out
}

pub fn name_filter(name: &str) -> String {
    call("filterByName", &format!("\"{}\"", name))
}

pub fn return_type_filter(return_type: &TypeDescriptor, optimize: bool) -> String {
    return_type_filter_expr(&canonical::canonicalize(return_type, optimize))
}

pub fn return_type_filter_expr(expression: &str) -> String {
    call("filterByReturnType", expression)
}

pub fn param_count_filter(count: usize) -> String {
    call("filterByParamCount", &count.to_string())
}

/// `.filterByParamTypes(...)`, wrapped over several lines when long.
pub fn param_types_filter(types: &[TypeDescriptor], optimize: bool) -> String {
    let expressions: Vec<String> = types
        .iter()
        .map(|t| canonical::canonicalize(t, optimize))
        .collect();

    let mut lines: Vec<Vec<&str>> = vec![Vec::new()];
    let mut line_len = 0;
    for expression in &expressions {
        let item_len = expression.len() + 2;
        let limit = if lines.len() == 1 {
            FIRST_LINE_LIMIT
        } else {
            LINE_LIMIT
        };
        if line_len > 0 && line_len + item_len >= limit {
            lines.push(Vec::new());
            line_len = 0;
        }
        line_len += item_len;
        if let Some(line) = lines.last_mut() {
            line.push(expression.as_str());
        }
    }

    let lines: Vec<String> = lines.into_iter().map(|line| line.join(", ")).collect();
    if lines.len() == 1 {
        call("filterByParamTypes", &lines[0])
    } else {
        format!(
            "{}.filterByParamTypes({}{}{})",
            INDENT,
            CONTINUATION_INDENT,
            lines.join(&format!(",{}", CONTINUATION_INDENT)),
            INDENT
        )
    }
}

/// Fragment selecting the target according to a discriminator.
pub fn discriminator_fragment(result: &DiscriminatorResult) -> String {
    match result {
        DiscriminatorResult::AccessUnique(category) => call(access_filter_name(*category), ""),
        DiscriminatorResult::ModifierCombination(predicates) => modifier_filters(predicates),
        DiscriminatorResult::ReturnTypeUnique(expression) => return_type_filter_expr(expression),
        DiscriminatorResult::NoDiscriminatorFound => comment(AMBIGUITY_WARNING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookgen_api::models::{ModifierSet, PrimitiveKind};

    #[test]
    fn short_parameter_lists_stay_on_one_line() {
        let types = vec![
            TypeDescriptor::Primitive(PrimitiveKind::Int),
            TypeDescriptor::object("java.lang.String"),
        ];
        assert_eq!(
            param_types_filter(&types, true),
            "\n    .filterByParamTypes(Int::class.java, String::class.java)"
        );
    }

    #[test]
    fn long_parameter_lists_wrap() {
        let types = vec![
            TypeDescriptor::object("com.example.first.VeryLongClassName"),
            TypeDescriptor::object("com.example.second.AnotherLongName"),
            TypeDescriptor::Primitive(PrimitiveKind::Int),
        ];
        let filter = param_types_filter(&types, true);
        assert_eq!(
            filter,
            "\n    .filterByParamTypes(\
             \n        ClassUtils.loadClass(\"com.example.first.VeryLongClassName\"),\
             \n        ClassUtils.loadClass(\"com.example.second.AnotherLongName\"),\
             \n        Int::class.java\
             \n    )"
        );
    }

    #[test]
    fn full_access_filter_lists_set_modifiers_in_order() {
        let method = MethodDescriptor {
            name: "a".to_string(),
            parameter_types: vec![],
            return_type: PrimitiveKind::Void.into(),
            access: AccessCategory::Protected,
            modifiers: ModifierSet::VARARGS | ModifierSet::STATIC,
            is_constructor: false,
        };
        assert_eq!(
            full_access_filter(&method),
            "\n    .filterProtected()\n    .filterStatic()\n    .filterVarargs()"
        );
    }

    #[test]
    fn negative_predicates_use_non_filters() {
        let predicates = [
            ModifierPredicate { modifier: Modifier::Static, expected: false },
            ModifierPredicate { modifier: Modifier::Final, expected: true },
        ];
        assert_eq!(
            modifier_filters(&predicates),
            "\n    .filterNonStatic()\n    .filterFinal()"
        );
    }

    #[test]
    fn missing_discriminator_renders_warning() {
        assert_eq!(
            discriminator_fragment(&DiscriminatorResult::NoDiscriminatorFound),
            format!("\n    // {}", AMBIGUITY_WARNING)
        );
    }
}
