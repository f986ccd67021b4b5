//! JSON symbol model exported from a decompiler session.
//!
//! The raw shapes mirror what a host dumps; [`SymbolModel`] holds the flat
//! descriptors the generator works on.

use super::type_parser::{parse_method_descriptor, parse_type};
use crate::error::{HookgenError, Result};
use hookgen_api::models::{
    AccessCategory, ClassDescriptor, FieldDescriptor, MethodDescriptor, Modifier, ModifierSet,
    PrimitiveKind, TypeDescriptor,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct RawSymbolModel {
    pub classes: Vec<RawClass>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawClass {
    /// Qualified name, nested types separated by `$`.
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMethod {
    pub name: String,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub return_type: Option<String>,
    /// JVM descriptor; replaces `parameters` and `return_type` when present.
    #[serde(default)]
    pub descriptor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolModel {
    pub classes: Vec<ClassDescriptor>,
}

impl SymbolModel {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSymbolModel = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let model = Self::from_json(&content)?;
        debug!(
            "Loaded {} class(es) from {}",
            model.classes.len(),
            path.display()
        );
        Ok(model)
    }

    pub fn from_raw(raw: RawSymbolModel) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut classes = Vec::with_capacity(raw.classes.len());
        for class in raw.classes {
            if !seen.insert(class.name.clone()) {
                return Err(HookgenError::InvalidModel(format!(
                    "duplicate class `{}`",
                    class.name
                )));
            }
            classes.push(convert_class(class)?);
        }
        Ok(Self { classes })
    }

    /// Look a class up by raw name; `.` is accepted in place of `$`.
    pub fn find_class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes
            .iter()
            .find(|c| c.raw_name == name)
            .or_else(|| {
                self.classes
                    .iter()
                    .find(|c| c.raw_name.replace('$', ".") == name)
            })
    }
}

/// Short class name: the last segment after `.` and `$`.
pub fn short_name(raw_name: &str) -> &str {
    raw_name
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(raw_name)
}

pub fn convert_class(raw: RawClass) -> Result<ClassDescriptor> {
    if raw.name.trim().is_empty() {
        return Err(HookgenError::InvalidModel("class with empty name".to_string()));
    }

    let fields = raw
        .fields
        .iter()
        .map(|f| convert_field(f, &raw.type_parameters))
        .collect::<Result<Vec<_>>>()?;
    let methods = raw
        .methods
        .iter()
        .map(|m| convert_method(m, &raw.type_parameters))
        .collect::<Result<Vec<_>>>()?;

    Ok(ClassDescriptor {
        name: short_name(&raw.name).to_string(),
        raw_name: raw.name,
        fields,
        methods,
    })
}

pub fn convert_field(raw: &RawField, class_type_parameters: &[String]) -> Result<FieldDescriptor> {
    let (access, modifiers) = parse_flags(&raw.flags, &raw.name)?;
    Ok(FieldDescriptor {
        name: raw.name.clone(),
        field_type: parse_type(&raw.type_name, class_type_parameters)?,
        access,
        modifiers,
    })
}

pub fn convert_method(raw: &RawMethod, class_type_parameters: &[String]) -> Result<MethodDescriptor> {
    let (access, modifiers) = parse_flags(&raw.flags, &raw.name)?;
    let is_constructor = raw.name == MethodDescriptor::CONSTRUCTOR_NAME;

    let scope: Vec<String> = class_type_parameters
        .iter()
        .chain(raw.type_parameters.iter())
        .cloned()
        .collect();

    let (parameter_types, return_type) = match &raw.descriptor {
        Some(descriptor) => parse_method_descriptor(descriptor)?,
        None => {
            let parameters = raw
                .parameters
                .iter()
                .map(|p| parse_type(p, &scope))
                .collect::<Result<Vec<_>>>()?;
            let return_type = match &raw.return_type {
                Some(ret) => parse_type(ret, &scope)?,
                None => TypeDescriptor::Primitive(PrimitiveKind::Void),
            };
            (parameters, return_type)
        }
    };

    Ok(MethodDescriptor {
        name: raw.name.clone(),
        parameter_types,
        return_type,
        access,
        modifiers,
        is_constructor,
    })
}

/// Split host flag strings into the access category and modifier bits.
pub fn parse_flags(flags: &[String], subject: &str) -> Result<(AccessCategory, ModifierSet)> {
    let mut access = None;
    let mut modifiers = ModifierSet::empty();

    for flag in flags {
        let category = match flag.to_lowercase().as_str() {
            "public" => Some(AccessCategory::Public),
            "private" => Some(AccessCategory::Private),
            "protected" => Some(AccessCategory::Protected),
            "static" => {
                modifiers |= Modifier::Static.bit();
                None
            }
            "final" => {
                modifiers |= Modifier::Final.bit();
                None
            }
            "abstract" => {
                modifiers |= Modifier::Abstract.bit();
                None
            }
            "native" => {
                modifiers |= Modifier::Native.bit();
                None
            }
            "varargs" => {
                modifiers |= Modifier::VarArgs.bit();
                None
            }
            other => {
                debug!("Ignoring flag `{}` on `{}`", other, subject);
                None
            }
        };

        if let Some(category) = category {
            if access.is_some_and(|existing| existing != category) {
                return Err(HookgenError::InvalidModel(format!(
                    "`{}` declares more than one access flag",
                    subject
                )));
            }
            access = Some(category);
        }
    }

    Ok((access.unwrap_or(AccessCategory::PackagePrivate), modifiers))
}
