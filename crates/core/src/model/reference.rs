//! Addressing declarations inside a [`SymbolModel`].
//!
//! `com.a.B` names a class, `com.a.B#x` a field or method, and
//! `com.a.B#x(int, java.lang.String)` a method by parameter types.

use super::symbols::SymbolModel;
use super::type_parser::parse_type;
use crate::error::{HookgenError, Result};
use hookgen_api::models::{ClassDescriptor, FieldDescriptor, MethodDescriptor, TypeDescriptor};

/// Separator between a type and its members.
pub const MEMBER_SEPARATOR: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub class: String,
    pub member: Option<MemberRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRef {
    pub name: String,
    /// `None` when no parameter list was written.
    pub parameters: Option<Vec<TypeDescriptor>>,
}

/// A declaration resolved against a model.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Class(&'a ClassDescriptor),
    Field {
        class: &'a ClassDescriptor,
        field: &'a FieldDescriptor,
    },
    Method {
        class: &'a ClassDescriptor,
        method: &'a MethodDescriptor,
    },
}

impl<'a> Declaration<'a> {
    pub fn class(&self) -> &'a ClassDescriptor {
        match self {
            Declaration::Class(class)
            | Declaration::Field { class, .. }
            | Declaration::Method { class, .. } => class,
        }
    }
}

impl NodeRef {
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || HookgenError::InvalidReference(text.to_string());
        let text = text.trim();

        let (class, member) = match text.split_once(MEMBER_SEPARATOR) {
            Some((class, member)) => (class.trim(), Some(member.trim())),
            None => (text, None),
        };
        if class.is_empty() {
            return Err(invalid());
        }

        let member = match member {
            None => None,
            Some("") => return Err(invalid()),
            Some(member) => Some(parse_member(member).ok_or_else(invalid)??),
        };

        Ok(Self {
            class: class.to_string(),
            member,
        })
    }

    /// Resolve against `model`. `nth` picks among several matches, in
    /// declaration order with fields before methods.
    pub fn resolve<'a>(&self, model: &'a SymbolModel, nth: Option<usize>) -> Result<Declaration<'a>> {
        let class = model
            .find_class(&self.class)
            .ok_or_else(|| HookgenError::NotFound(format!("class `{}`", self.class)))?;

        let Some(member) = &self.member else {
            return Ok(Declaration::Class(class));
        };

        let mut candidates: Vec<Declaration<'a>> = Vec::new();
        if member.parameters.is_none() {
            candidates.extend(
                class
                    .fields
                    .iter()
                    .filter(|f| f.name == member.name)
                    .map(|field| Declaration::Field { class, field }),
            );
        }
        candidates.extend(
            class
                .methods
                .iter()
                .filter(|m| m.name == member.name && member.accepts_parameters(m))
                .map(|method| Declaration::Method { class, method }),
        );

        let count = candidates.len();
        match (count, nth) {
            (0, _) => Err(HookgenError::NotFound(format!(
                "member `{}` in `{}`",
                member.name, class.raw_name
            ))),
            (1, None) => Ok(candidates[0]),
            (_, None) => Err(HookgenError::Ambiguous {
                reference: self.to_string(),
                count,
            }),
            (_, Some(index)) => candidates.get(index).copied().ok_or_else(|| {
                HookgenError::NotFound(format!(
                    "match #{} of `{}` ({} available)",
                    index, self, count
                ))
            }),
        }
    }
}

impl MemberRef {
    fn accepts_parameters(&self, method: &MethodDescriptor) -> bool {
        let Some(parameters) = &self.parameters else {
            return true;
        };
        // Compared by erased display form so `T` matches a declared type variable.
        parameters.len() == method.parameter_types.len()
            && parameters
                .iter()
                .zip(&method.parameter_types)
                .all(|(wanted, actual)| wanted.to_string() == actual.to_string())
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class)?;
        if let Some(member) = &self.member {
            write!(f, "{}{}", MEMBER_SEPARATOR, member.name)?;
            if let Some(parameters) = &member.parameters {
                let list = parameters
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({})", list)?;
            }
        }
        Ok(())
    }
}

fn parse_member(member: &str) -> Option<Result<MemberRef>> {
    let Some(open) = member.find('(') else {
        return Some(Ok(MemberRef {
            name: member.to_string(),
            parameters: None,
        }));
    };

    let name = member[..open].trim();
    let inner = member[open + 1..].strip_suffix(')')?;
    if name.is_empty() {
        return None;
    }

    let parameters = split_top_level(inner)
        .into_iter()
        .map(|p| parse_type(p, &[]))
        .collect::<Result<Vec<_>>>();

    Some(parameters.map(|parameters| MemberRef {
        name: name.to_string(),
        parameters: Some(parameters),
    }))
}

/// Split on commas that are not nested inside `<...>`.
fn split_top_level(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts
}
