use crate::canonical;
use hookgen_api::models::{FieldDescriptor, Modifier};

/// `XposedHelpers.get[Static]<Type>Field(/*runtimeObject*/, "name")`
pub fn field_snippet(field: &FieldDescriptor) -> String {
    let is_static = if field.modifiers.has(Modifier::Static) {
        "Static"
    } else {
        ""
    };
    let type_name = canonical::boxed_name_or_object(&field.field_type);
    format!(
        "XposedHelpers.get{}{}Field(/*runtimeObject*/, \"{}\")",
        is_static, type_name, field.name
    )
}
