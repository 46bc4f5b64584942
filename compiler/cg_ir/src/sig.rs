//! Immutable method signature view.

use std::fmt;

use crate::{Param, QualifiedName, TypeRef};

/// Borrowed view of the parts of a method that eligibility predicates and
/// signature copying look at.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MethodSig<'a> {
    pub name: &'a str,
    pub return_type: &'a TypeRef,
    pub params: &'a [Param],
    pub thrown: &'a [QualifiedName],
    pub has_body: bool,
}

impl MethodSig<'_> {
    /// Same name, parameters (names, types, order) and thrown types.
    ///
    /// Return type and body presence are not compared.
    pub fn same_shape(&self, other: &MethodSig<'_>) -> bool {
        self.name == other.name && self.params == other.params && self.thrown == other.thrown
    }
}

/// `WidgetBuilder setSize(int w, int h) throws IllegalArgumentException`
impl fmt::Display for MethodSig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")?;
        for (i, thrown) in self.thrown.iter().enumerate() {
            f.write_str(if i == 0 { " throws " } else { ", " })?;
            f.write_str(thrown.simple_name())?;
        }
        Ok(())
    }
}
