//! Type references.
//!
//! The engine performs no type checking. A `TypeRef` is the declared type
//! exactly as the front-end wrote it, resolved only far enough to tell
//! `void` apart from everything else and to copy signatures verbatim.

use std::fmt;

use crate::QualifiedName;

/// Primitive value types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Keyword spelling.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }
}

/// A declared type as it appears in a signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TypeRef {
    /// The "no value" return type.
    Void,
    Primitive(PrimitiveKind),
    /// A class or interface, by qualified name.
    Named(QualifiedName),
}

impl TypeRef {
    /// Reference to a named type.
    pub fn named(name: impl Into<QualifiedName>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Exactly the `void` type.
    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }
}

/// Renders the simple spelling (`void`, `int`, `Widget`).
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Primitive(kind) => f.write_str(kind.name()),
            TypeRef::Named(name) => f.write_str(name.simple_name()),
        }
    }
}

impl From<PrimitiveKind> for TypeRef {
    fn from(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }
}

impl From<QualifiedName> for TypeRef {
    fn from(name: QualifiedName) -> Self {
        TypeRef::Named(name)
    }
}
