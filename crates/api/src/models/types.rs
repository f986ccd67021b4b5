use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive JVM types, including `void` which only appears as a return type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Int,
    Byte,
    Short,
    Long,
    Float,
    Double,
    Char,
    Boolean,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Int,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Char,
        PrimitiveKind::Boolean,
        PrimitiveKind::Void,
    ];

    /// Java keyword for this primitive, e.g. `int`.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Void => "void",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == s)
    }

    /// Single-character JVM descriptor, e.g. `I` for `int`.
    pub fn descriptor(self) -> char {
        match self {
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Void => 'V',
        }
    }

    pub fn from_descriptor(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.descriptor() == c)
    }
}

/// A type as the host symbol model presents it, already erased.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "data")]
pub enum TypeDescriptor {
    /// Primitive type (e.g., `int`, `void`)
    Primitive(PrimitiveKind),

    /// Array of the element type; nested for multi-dimensional arrays
    Array(Box<TypeDescriptor>),

    /// Parameterized type, carrying its erased raw name (e.g. `java.util.List`)
    Generic(String),

    /// Class reference by qualified name, nested types separated by `$`
    Object(String),

    /// Type variable such as `T`. `known` is false when the host could not
    /// resolve the variable's bound.
    TypeVariable { name: String, known: bool },
}

impl TypeDescriptor {
    pub fn object(name: impl Into<String>) -> Self {
        TypeDescriptor::Object(name.into())
    }

    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeDescriptor::Primitive(p) => Some(*p),
            _ => None,
        }
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }
}

/// Java source notation, e.g. `java.lang.String[]`.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(p) => f.write_str(p.keyword()),
            TypeDescriptor::Array(element) => write!(f, "{}[]", element),
            TypeDescriptor::Generic(raw) => f.write_str(raw),
            TypeDescriptor::Object(name) => f.write_str(name),
            TypeDescriptor::TypeVariable { name, .. } => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_source_notation() {
        let ty = TypeDescriptor::array_of(TypeDescriptor::array_of(PrimitiveKind::Int.into()));
        assert_eq!(ty.to_string(), "int[][]");
        assert_eq!(TypeDescriptor::object("a.B$C").to_string(), "a.B$C");
    }

    #[test]
    fn descriptor_chars_round_trip_through_lookup() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_descriptor(kind.descriptor()), Some(kind));
            assert_eq!(PrimitiveKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_keyword("string"), None);
    }
}
