//! Type canonicalization.
//!
//! Turns a [`TypeDescriptor`] into the Kotlin expression a generated hook
//! uses to obtain the matching `Class` object at runtime.

use hookgen_api::models::{PrimitiveKind, TypeDescriptor};

/// Name used when a type has no more specific representation.
pub const OBJECT_FALLBACK: &str = "Object";

/// Suffix appended to array element names (`IntArray`).
pub const ARRAY_SUFFIX: &str = "Array";

/// Root-language package whose members are referenced by simple name.
pub const ROOT_LANG_PREFIX: &str = "java.lang.";

/// Packages that are always present on the device and can be referenced statically.
pub const SYSTEM_PREFIXES: [&str; 6] = ["android.", "androidx.", "jdk.", "dalvik.", "java.", "javax."];

const NESTED_SEPARATOR: char = '$';
const NAMESPACE_SEPARATOR: char = '.';

/// Boxed Kotlin name of a primitive, e.g. `Int` for `int`.
pub fn boxed_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Int => "Int",
        PrimitiveKind::Byte => "Byte",
        PrimitiveKind::Short => "Short",
        PrimitiveKind::Long => "Long",
        PrimitiveKind::Float => "Float",
        PrimitiveKind::Double => "Double",
        PrimitiveKind::Char => "Char",
        PrimitiveKind::Boolean => "Boolean",
        PrimitiveKind::Void => "Void",
    }
}

/// Boxed name for primitives, [`OBJECT_FALLBACK`] for everything else.
pub fn boxed_name_or_object(ty: &TypeDescriptor) -> &'static str {
    ty.as_primitive().map(boxed_name).unwrap_or(OBJECT_FALLBACK)
}

pub fn is_system_class_name(name: &str) -> bool {
    SYSTEM_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Resolve the base name of a type before choosing static or dynamic lookup.
pub fn base_name(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Generic(raw) => raw.clone(),
        TypeDescriptor::Primitive(kind) => boxed_name(*kind).to_string(),
        TypeDescriptor::Object(name) if is_root_lang_member(name) => {
            normalize_nested(&name[ROOT_LANG_PREFIX.len()..])
        }
        TypeDescriptor::TypeVariable { known: true, .. } => OBJECT_FALLBACK.to_string(),
        TypeDescriptor::Array(element) => {
            let element = element.as_primitive().map(boxed_name).unwrap_or("");
            format!("{}{}", element, ARRAY_SUFFIX)
        }
        TypeDescriptor::Object(name) | TypeDescriptor::TypeVariable { name, .. } => {
            normalize_nested(name)
        }
    }
}

/// Kotlin expression evaluating to the `Class` object for `ty`.
///
/// With `optimize` set, qualified names outside [`SYSTEM_PREFIXES`] are
/// loaded by name at runtime, since the hook module cannot compile against
/// the target app's classes.
pub fn canonicalize(ty: &TypeDescriptor, optimize: bool) -> String {
    let base = base_name(ty);
    if optimize && base.contains(NAMESPACE_SEPARATOR) && !is_system_class_name(&base) {
        format!("ClassUtils.loadClass(\"{}\")", base)
    } else {
        format!("{}::class.java", base)
    }
}

// Direct members only; `java.lang.reflect.Method` keeps its package.
fn is_root_lang_member(name: &str) -> bool {
    name.strip_prefix(ROOT_LANG_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(NAMESPACE_SEPARATOR))
}

fn normalize_nested(name: &str) -> String {
    name.replace(NESTED_SEPARATOR, ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(kind: PrimitiveKind) -> TypeDescriptor {
        TypeDescriptor::Primitive(kind)
    }

    #[test]
    fn primitives_use_boxed_names() {
        assert_eq!(canonicalize(&prim(PrimitiveKind::Boolean), true), "Boolean::class.java");
        assert_eq!(canonicalize(&prim(PrimitiveKind::Boolean), false), "Boolean::class.java");
        assert_eq!(canonicalize(&prim(PrimitiveKind::Void), false), "Void::class.java");
    }

    #[test]
    fn primitive_arrays_get_array_suffix() {
        let ty = TypeDescriptor::array_of(prim(PrimitiveKind::Int));
        assert_eq!(base_name(&ty), "IntArray");
        assert_eq!(canonicalize(&ty, false), "IntArray::class.java");
    }

    #[test]
    fn object_arrays_use_generic_array_marker() {
        let ty = TypeDescriptor::array_of(TypeDescriptor::object("com.example.Foo"));
        assert_eq!(base_name(&ty), "Array");

        let nested = TypeDescriptor::array_of(TypeDescriptor::array_of(prim(PrimitiveKind::Int)));
        assert_eq!(base_name(&nested), "Array");
    }

    #[test]
    fn root_lang_types_are_stripped_to_simple_name() {
        let ty = TypeDescriptor::object("java.lang.String");
        assert_eq!(canonicalize(&ty, true), "String::class.java");

        let nested = TypeDescriptor::object("java.lang.Thread$State");
        assert_eq!(base_name(&nested), "Thread.State");
    }

    #[test]
    fn root_lang_subpackages_keep_qualified_name() {
        let ty = TypeDescriptor::object("java.lang.reflect.Method");
        assert_eq!(canonicalize(&ty, true), "java.lang.reflect.Method::class.java");
    }

    #[test]
    fn app_types_load_dynamically_when_optimized() {
        let ty = TypeDescriptor::object("com.example.Outer$Inner");
        assert_eq!(
            canonicalize(&ty, true),
            "ClassUtils.loadClass(\"com.example.Outer.Inner\")"
        );
        assert_eq!(canonicalize(&ty, false), "com.example.Outer.Inner::class.java");
    }

    #[test]
    fn system_types_never_load_dynamically() {
        for name in [
            "java.util.List",
            "android.os.Bundle",
            "androidx.core.app.Foo",
            "javax.crypto.Cipher",
            "jdk.internal.Misc",
            "dalvik.system.DexFile",
        ] {
            let expr = canonicalize(&TypeDescriptor::object(name), true);
            assert!(!expr.starts_with("ClassUtils.loadClass"), "{} -> {}", name, expr);
        }
    }

    #[test]
    fn generic_keeps_raw_name() {
        let ty = TypeDescriptor::Generic("com.example.Box".to_string());
        assert_eq!(canonicalize(&ty, true), "ClassUtils.loadClass(\"com.example.Box\")");

        let list = TypeDescriptor::Generic("java.util.List".to_string());
        assert_eq!(canonicalize(&list, true), "java.util.List::class.java");
    }

    #[test]
    fn type_variables_collapse_to_object_when_known() {
        let known = TypeDescriptor::TypeVariable { name: "T".to_string(), known: true };
        assert_eq!(canonicalize(&known, true), "Object::class.java");

        let unknown = TypeDescriptor::TypeVariable { name: "T".to_string(), known: false };
        assert_eq!(canonicalize(&unknown, true), "T::class.java");
    }

    #[test]
    fn unqualified_objects_stay_static() {
        let ty = TypeDescriptor::object("a");
        assert_eq!(canonicalize(&ty, true), "a::class.java");
    }

    #[test]
    fn field_helpers_fall_back_to_object() {
        assert_eq!(boxed_name_or_object(&prim(PrimitiveKind::Long)), "Long");
        assert_eq!(boxed_name_or_object(&TypeDescriptor::object("java.lang.String")), OBJECT_FALLBACK);
    }
}
