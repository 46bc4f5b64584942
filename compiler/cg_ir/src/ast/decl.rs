//! Declaration nodes: types, methods, parameters.

use std::fmt;

use super::Block;
use crate::{MethodSig, Modifiers, QualifiedName, TypeRef};

/// A formal parameter: `<type> <name>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A method member.
///
/// `body` is `None` for abstract and native methods.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Modifiers,
    pub return_type: TypeRef,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Param>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thrown: Vec<QualifiedName>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: Option<Block>,
}

impl MethodDecl {
    /// Create a bodyless method from its signature parts.
    pub fn new(
        modifiers: Modifiers,
        return_type: TypeRef,
        name: impl Into<String>,
        params: Vec<Param>,
        thrown: Vec<QualifiedName>,
    ) -> Self {
        MethodDecl {
            name: name.into(),
            modifiers,
            return_type,
            params,
            thrown,
            body: None,
        }
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }

    /// Immutable signature view.
    pub fn sig(&self) -> MethodSig<'_> {
        MethodSig {
            name: &self.name,
            return_type: &self.return_type,
            params: &self.params,
            thrown: &self.thrown,
            has_body: self.body.is_some(),
        }
    }
}

/// A class-like type declaration.
///
/// The qualified name is the declaration's identity and never changes
/// after construction. Members keep declaration order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    name: QualifiedName,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Modifiers,
    #[cfg_attr(feature = "serde", serde(default))]
    methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// Create an empty class.
    pub fn class(name: impl Into<QualifiedName>, modifiers: Modifiers) -> Self {
        TypeDecl {
            name: name.into(),
            modifiers,
            methods: Vec::new(),
        }
    }

    /// Builder-style variant of [`TypeDecl::add_method`].
    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    #[inline]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Reference to this type, for use in signatures.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Named(self.name.clone())
    }

    /// Members in declaration order.
    #[inline]
    pub fn methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    /// Append a member.
    pub fn add_method(&mut self, method: MethodDecl) {
        self.methods.push(method);
    }

    /// First member with the given simple name.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }
}
