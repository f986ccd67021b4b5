use hookgen_api::models::ClassDescriptor;
use hookgen_core::model::reference::{MemberRef, NodeRef};
use tabled::Tabled;

/// One row of `hookgen list`.
#[derive(Tabled, Debug, PartialEq, Eq)]
pub struct DeclarationView {
    pub kind: String,
    pub reference: String,
    pub signature: String,
    /// Other methods sharing name and parameter types.
    pub collisions: String,
}

impl DeclarationView {
    /// The class row followed by its fields, then its methods.
    pub fn for_class(class: &ClassDescriptor) -> Vec<Self> {
        let mut rows = vec![Self {
            kind: "class".to_string(),
            reference: class.raw_name.clone(),
            signature: class.name.clone(),
            collisions: "-".to_string(),
        }];

        rows.extend(class.fields.iter().map(|field| Self {
            kind: "field".to_string(),
            reference: member_reference(class, &field.name, None),
            signature: format!("{}: {}", field.name, field.field_type),
            collisions: "-".to_string(),
        }));

        rows.extend(class.methods.iter().map(|method| {
            let kind = if method.is_constructor { "constructor" } else { "method" };
            let collisions = match class.collisions_of(method).len() {
                0 => "-".to_string(),
                n => n.to_string(),
            };
            Self {
                kind: kind.to_string(),
                reference: member_reference(
                    class,
                    &method.name,
                    Some(method.parameter_types.clone()),
                ),
                signature: method.signature(),
                collisions,
            }
        }));
        rows
    }
}

fn member_reference(
    class: &ClassDescriptor,
    name: &str,
    parameters: Option<Vec<hookgen_api::models::TypeDescriptor>>,
) -> String {
    NodeRef {
        class: class.raw_name.clone(),
        member: Some(MemberRef {
            name: name.to_string(),
            parameters,
        }),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookgen_core::model::SymbolModel;

    #[test]
    fn test_rows_follow_declaration_order() {
        let model = SymbolModel::from_json(
            r#"{ "classes": [ {
                "name": "com.a.B",
                "fields": [ { "name": "x", "type": "long" } ],
                "methods": [
                    { "name": "<init>", "flags": ["public"] },
                    { "name": "m", "flags": ["public"], "parameters": ["int"] },
                    { "name": "m", "flags": ["private"], "parameters": ["int"] }
                ]
            } ] }"#,
        )
        .unwrap();

        let rows = DeclarationView::for_class(&model.classes[0]);
        let kinds: Vec<&str> = rows.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, ["class", "field", "constructor", "method", "method"]);
        assert_eq!(rows[1].reference, "com.a.B#x");
        assert_eq!(rows[1].signature, "x: long");
        assert_eq!(rows[2].reference, "com.a.B#<init>()");
        assert_eq!(rows[2].collisions, "-");
        assert_eq!(rows[3].reference, "com.a.B#m(int)");
        assert_eq!(rows[3].signature, "public m(int): void");
        assert_eq!(rows[3].collisions, "1");
    }
}
