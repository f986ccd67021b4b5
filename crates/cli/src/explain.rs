use crate::TargetArgs;
use hookgen_api::models::DiscriminatorResult;
use hookgen_core::model::reference::NodeRef;
use hookgen_core::model::{Declaration, SymbolModel};
use hookgen_core::snippet::method::discriminate;
use hookgen_core::{CodegenOptions, HookgenError};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

pub fn run(
    target: TargetArgs,
    config: Option<PathBuf>,
    no_class_optimization: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = load_options(config.as_deref(), no_class_optimization)?;
    let model = SymbolModel::load(&target.model)?;
    let reference = NodeRef::parse(&target.reference)?;

    let report = report(&model, &reference, target.nth, &options)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Same option sources as `gen`, so both commands agree on return type expressions.
fn load_options(config: Option<&Path>, no_class_optimization: bool) -> hookgen_core::Result<CodegenOptions> {
    let mut options = CodegenOptions::load_or_default(config)?;
    if no_class_optimization {
        options.class_optimization = false;
    }
    Ok(options)
}

fn report(
    model: &SymbolModel,
    reference: &NodeRef,
    nth: Option<usize>,
    options: &CodegenOptions,
) -> hookgen_core::Result<Value> {
    let Declaration::Method { class, method } = reference.resolve(model, nth)? else {
        return Err(HookgenError::InvalidReference(format!("`{}` is not a method", reference)));
    };
    let result = discriminate(class, method, options)?;

    Ok(json!({
        "class": class.raw_name,
        "method": method.signature(),
        "siblings": class.collisions_of(method).len(),
        "found": result.as_ref().is_some_and(DiscriminatorResult::is_found),
        "result": result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{ "classes": [ {
        "name": "com.a.B",
        "fields": [ { "name": "f", "type": "int" } ],
        "methods": [
            { "name": "m", "flags": ["public"], "return_type": "com.example.Foo" },
            { "name": "m", "flags": ["public"], "return_type": "int" },
            { "name": "n", "flags": ["public"] },
            { "name": "n", "flags": ["public"] }
        ]
    } ] }"#;

    fn explain(reference: &str, nth: Option<usize>, options: &CodegenOptions) -> hookgen_core::Result<Value> {
        let model = SymbolModel::from_json(MODEL)?;
        report(&model, &NodeRef::parse(reference)?, nth, options)
    }

    #[test]
    fn test_report_follows_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{ "class_optimization": false }"#).unwrap();

        let options = load_options(Some(&path), false).unwrap();
        let report = explain("com.a.B#m", Some(0), &options).unwrap();
        assert_eq!(report["result"]["kind"], "return_type_unique");
        assert_eq!(report["result"]["value"], "com.example.Foo::class.java");
        assert_eq!(report["found"], true);
        assert_eq!(report["siblings"], 1);
    }

    #[test]
    fn test_flag_overrides_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{ "class_optimization": true }"#).unwrap();

        let options = load_options(Some(&path), true).unwrap();
        assert!(!options.class_optimization);
    }

    #[test]
    fn test_report_without_discriminator() {
        let report = explain("com.a.B#n", Some(1), &CodegenOptions::default()).unwrap();
        assert_eq!(report["found"], false);
        assert_eq!(report["result"]["kind"], "no_discriminator_found");
    }

    #[test]
    fn test_fields_are_rejected() {
        let err = explain("com.a.B#f", None, &CodegenOptions::default()).unwrap_err();
        assert!(matches!(err, HookgenError::InvalidReference(_)));
    }
}
