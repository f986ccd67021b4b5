use super::escape_kotlin_string;
use hookgen_api::models::ClassDescriptor;

/// `val fooClass = ClassUtils.loadClass("com.a.Foo")`
pub fn class_snippet(class: &ClassDescriptor) -> String {
    format!(
        "val {}Class = ClassUtils.loadClass(\"{}\")",
        lower_case_first(&class.name),
        escape_kotlin_string(&class.raw_name)
    )
}

pub fn lower_case_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_only_the_first_character() {
        assert_eq!(lower_case_first("MainActivity"), "mainActivity");
        assert_eq!(lower_case_first("a"), "a");
        assert_eq!(lower_case_first(""), "");
    }
}
