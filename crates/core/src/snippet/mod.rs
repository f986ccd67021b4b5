//! Hook snippet assembly for classes, fields, methods and constructors.

pub mod class;
pub mod field;
pub mod filters;
pub mod method;

use crate::error::{HookgenError, Result};
use crate::model::Declaration;
use crate::options::CodegenOptions;
use tracing::info;

/// Escape `$` so nested class names survive Kotlin string templates.
pub fn escape_kotlin_string(value: &str) -> String {
    value.replace('$', "\\$")
}

#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    options: CodegenOptions,
}

impl CodeGenerator {
    pub fn new(options: CodegenOptions) -> Self {
        Self { options }
    }

    pub fn generate(&self, declaration: Declaration<'_>) -> Result<String> {
        if !self.options.enable {
            return Err(HookgenError::Disabled);
        }

        let snippet = match declaration {
            Declaration::Class(class) => class::class_snippet(class),
            Declaration::Field { field, .. } => field::field_snippet(field),
            Declaration::Method { class, method } => {
                method::method_snippet(class, method, &self.options)?
            }
        };

        info!(
            "Generated snippet for {} ({} bytes)",
            describe(&declaration),
            snippet.len()
        );
        Ok(snippet)
    }
}

fn describe(declaration: &Declaration<'_>) -> String {
    let class = &declaration.class().raw_name;
    match declaration {
        Declaration::Class(_) => class.clone(),
        Declaration::Field { field, .. } => format!("{}#{}", class, field.name),
        Declaration::Method { method, .. } => format!("{}#{}", class, method.signature()),
    }
}
