use super::types::TypeDescriptor;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Access level of a declaration. A declaration has exactly one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessCategory {
    Public,
    Private,
    Protected,
    PackagePrivate,
}

impl AccessCategory {
    /// Search order used by the disambiguation engine.
    pub const ALL: [AccessCategory; 4] = [
        AccessCategory::Public,
        AccessCategory::Private,
        AccessCategory::Protected,
        AccessCategory::PackagePrivate,
    ];

    /// Source keyword; empty for package-private.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessCategory::Public => "public",
            AccessCategory::Private => "private",
            AccessCategory::Protected => "protected",
            AccessCategory::PackagePrivate => "",
        }
    }
}

bitflags! {
    /// Independent modifier attributes of a method or field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ModifierSet: u8 {
        const STATIC = 0x01;
        const FINAL = 0x02;
        const ABSTRACT = 0x04;
        const NATIVE = 0x08;
        const VARARGS = 0x10;
    }
}

/// A single modifier flag, in the fixed order the combination search uses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Static,
    Final,
    Abstract,
    Native,
    VarArgs,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::Static,
        Modifier::Final,
        Modifier::Abstract,
        Modifier::Native,
        Modifier::VarArgs,
    ];

    pub fn bit(self) -> ModifierSet {
        match self {
            Modifier::Static => ModifierSet::STATIC,
            Modifier::Final => ModifierSet::FINAL,
            Modifier::Abstract => ModifierSet::ABSTRACT,
            Modifier::Native => ModifierSet::NATIVE,
            Modifier::VarArgs => ModifierSet::VARARGS,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
            Modifier::Native => "native",
            Modifier::VarArgs => "varargs",
        }
    }
}

impl ModifierSet {
    pub fn has(self, modifier: Modifier) -> bool {
        self.contains(modifier.bit())
    }

    /// Set members in [`Modifier::ALL`] order.
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.has(*m))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ModifierSet::empty(), |set, m| set | m.bit())
    }
}

/// One method or constructor declaration, flattened from the host model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    pub name: String,
    pub parameter_types: Vec<TypeDescriptor>,
    pub return_type: TypeDescriptor,
    pub access: AccessCategory,
    pub modifiers: ModifierSet,
    pub is_constructor: bool,
}

impl MethodDescriptor {
    /// Constructors are named `<init>` in the host model.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";

    /// True when `other` has the same name and erased parameter types.
    pub fn collides_with(&self, other: &MethodDescriptor) -> bool {
        self.name == other.name && self.parameter_types == other.parameter_types
    }

    /// Human readable signature, e.g. `public static a(int, java.lang.String): void`.
    pub fn signature(&self) -> String {
        let mut prefix: Vec<&str> = Vec::new();
        if !self.access.keyword().is_empty() {
            prefix.push(self.access.keyword());
        }
        prefix.extend(self.modifiers.modifiers().map(Modifier::keyword));

        let params = self
            .parameter_types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let head = if prefix.is_empty() {
            String::new()
        } else {
            format!("{} ", prefix.join(" "))
        };
        if self.is_constructor {
            format!("{}{}({})", head, self.name, params)
        } else {
            format!("{}{}({}): {}", head, self.name, params, self.return_type)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: TypeDescriptor,
    pub access: AccessCategory,
    pub modifiers: ModifierSet,
}

/// A class with its members in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Qualified name with `$` between nested types, e.g. `com.a.Outer$Inner`.
    pub raw_name: String,
    /// Short name, e.g. `Inner`.
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// Methods other than `method` that share its name, whatever their parameters.
    pub fn has_other_same_name_method(&self, method: &MethodDescriptor) -> bool {
        self.methods
            .iter()
            .any(|m| !std::ptr::eq(m, method) && m.name == method.name)
    }

    /// Methods colliding with `method` on name and parameter types, excluding itself.
    pub fn collisions_of<'a>(&'a self, method: &MethodDescriptor) -> Vec<&'a MethodDescriptor> {
        self.methods
            .iter()
            .filter(|m| !std::ptr::eq(*m, method) && m.collides_with(method))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::PrimitiveKind;

    fn method(name: &str, params: Vec<TypeDescriptor>) -> MethodDescriptor {
        MethodDescriptor {
            name: name.to_string(),
            parameter_types: params,
            return_type: PrimitiveKind::Void.into(),
            access: AccessCategory::Public,
            modifiers: ModifierSet::empty(),
            is_constructor: false,
        }
    }

    #[test]
    fn modifiers_iterate_in_fixed_order() {
        let set: ModifierSet = [Modifier::VarArgs, Modifier::Static, Modifier::Native]
            .into_iter()
            .collect();
        let order: Vec<Modifier> = set.modifiers().collect();
        assert_eq!(order, vec![Modifier::Static, Modifier::Native, Modifier::VarArgs]);
    }

    #[test]
    fn collisions_exclude_target_but_keep_identical_duplicates() {
        let int = TypeDescriptor::Primitive(PrimitiveKind::Int);
        let class = ClassDescriptor {
            raw_name: "a.B".to_string(),
            name: "B".to_string(),
            fields: vec![],
            methods: vec![
                method("a", vec![int.clone()]),
                method("a", vec![int.clone()]),
                method("a", vec![]),
                method("b", vec![int.clone()]),
            ],
        };

        let target = &class.methods[0];
        let collisions = class.collisions_of(target);
        assert_eq!(collisions.len(), 1);
        assert!(std::ptr::eq(collisions[0], &class.methods[1]));
        assert!(class.has_other_same_name_method(&class.methods[2]));
        assert!(!class.has_other_same_name_method(&class.methods[3]));
    }

    #[test]
    fn signature_lists_access_and_modifiers() {
        let mut m = method("a", vec![TypeDescriptor::object("java.lang.String")]);
        m.modifiers = ModifierSet::STATIC | ModifierSet::FINAL;
        assert_eq!(m.signature(), "public static final a(java.lang.String): void");

        m.access = AccessCategory::PackagePrivate;
        m.modifiers = ModifierSet::empty();
        assert_eq!(m.signature(), "a(java.lang.String): void");
    }
}
