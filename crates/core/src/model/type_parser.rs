//! Parsing of type names found in symbol model files.
//!
//! Accepts Java source notation (`int[]`, `java.util.List<T>`, `String...`)
//! as well as JVM descriptors (`[I`, `Ljava/lang/String;`).

use crate::error::{HookgenError, Result};
use hookgen_api::models::{PrimitiveKind, TypeDescriptor};

/// Parse one type name. Names listed in `type_parameters` become type variables.
pub fn parse_type(text: &str, type_parameters: &[String]) -> Result<TypeDescriptor> {
    let s = text.trim();
    if s.is_empty() {
        return Err(HookgenError::InvalidType(text.to_string()));
    }

    // Varargs are arrays at the bytecode level.
    if let Some(element) = s.strip_suffix("...") {
        return Ok(TypeDescriptor::array_of(parse_type(element, type_parameters)?));
    }
    if let Some(element) = s.strip_suffix("[]") {
        return Ok(TypeDescriptor::array_of(parse_type(element, type_parameters)?));
    }

    if let Some(open) = s.find('<') {
        let base = s[..open].trim();
        if !s.ends_with('>') || base.is_empty() || !is_qualified_identifier(base) {
            return Err(HookgenError::InvalidType(text.to_string()));
        }
        return Ok(TypeDescriptor::Generic(base.replace('/', ".")));
    }

    if let Some(kind) = PrimitiveKind::from_keyword(s) {
        return Ok(TypeDescriptor::Primitive(kind));
    }

    if type_parameters.iter().any(|p| p == s) {
        return Ok(TypeDescriptor::TypeVariable {
            name: s.to_string(),
            known: true,
        });
    }

    if looks_like_descriptor(s) {
        return parse_descriptor(s).ok_or_else(|| HookgenError::InvalidType(text.to_string()));
    }

    if !is_qualified_identifier(s) {
        return Err(HookgenError::InvalidType(text.to_string()));
    }
    if is_undeclared_type_variable(s) {
        return Ok(TypeDescriptor::TypeVariable {
            name: s.to_string(),
            known: false,
        });
    }
    Ok(TypeDescriptor::Object(s.replace('/', ".")))
}

/// Parse a JVM method descriptor such as `(ILjava/lang/String;)V`.
pub fn parse_method_descriptor(descriptor: &str) -> Result<(Vec<TypeDescriptor>, TypeDescriptor)> {
    let invalid = || HookgenError::InvalidType(descriptor.to_string());

    let rest = descriptor.trim().strip_prefix('(').ok_or_else(invalid)?;
    let (params, ret) = rest.split_once(')').ok_or_else(invalid)?;

    let mut parameters = Vec::new();
    let mut remaining = params;
    while !remaining.is_empty() {
        let (ty, tail) = parse_descriptor_prefix(remaining).ok_or_else(invalid)?;
        if ty == TypeDescriptor::Primitive(PrimitiveKind::Void) {
            return Err(invalid());
        }
        parameters.push(ty);
        remaining = tail;
    }

    let return_type = parse_descriptor(ret).ok_or_else(invalid)?;
    Ok((parameters, return_type))
}

fn looks_like_descriptor(s: &str) -> bool {
    s.starts_with('[')
        || (s.starts_with('L') && s.ends_with(';'))
        || (s.len() == 1 && s.chars().next().and_then(PrimitiveKind::from_descriptor).is_some())
}

fn parse_descriptor(s: &str) -> Option<TypeDescriptor> {
    match parse_descriptor_prefix(s)? {
        (ty, "") => Some(ty),
        _ => None,
    }
}

fn parse_descriptor_prefix(s: &str) -> Option<(TypeDescriptor, &str)> {
    let first = s.chars().next()?;
    match first {
        '[' => {
            let (element, rest) = parse_descriptor_prefix(&s[1..])?;
            Some((TypeDescriptor::array_of(element), rest))
        }
        'L' => {
            let end = s.find(';')?;
            let name = &s[1..end];
            if name.is_empty() {
                return None;
            }
            Some((TypeDescriptor::Object(name.replace('/', ".")), &s[end + 1..]))
        }
        c => {
            let kind = PrimitiveKind::from_descriptor(c)?;
            Some((TypeDescriptor::Primitive(kind), &s[1..]))
        }
    }
}

/// A lone uppercase letter outside any declared scope, e.g. `T` or `E`.
fn is_undeclared_type_variable(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

fn is_qualified_identifier(s: &str) -> bool {
    !s.starts_with('.')
        && !s.ends_with('.')
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | '/'))
}
