//! Fully-qualified type names.

use std::borrow::Borrow;
use std::fmt;

/// Fully-qualified name of a type declaration, e.g. `com.acme.Widget`.
///
/// The qualified name is the identity of a declaration: two declarations
/// with the same qualified name are the same type.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Package separator.
    pub const SEPARATOR: char = '.';

    /// Create a qualified name from its dotted form.
    pub fn new(name: impl Into<String>) -> Self {
        QualifiedName(name.into())
    }

    /// The dotted form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment.
    ///
    /// `com.acme.Widget` -> `Widget`
    pub fn simple_name(&self) -> &str {
        match self.0.rfind(Self::SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Derive a sibling name by appending `suffix` to the last segment.
    ///
    /// `com.acme.Widget` + `Builder` -> `com.acme.WidgetBuilder`
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut derived = String::with_capacity(self.0.len() + suffix.len());
        derived.push_str(&self.0);
        derived.push_str(suffix);
        QualifiedName(derived)
    }

    /// Whether the dotted form starts with `prefix`.
    ///
    /// Plain string prefix test: `com.acme.` admits `com.acme.Widget` and
    /// `com.acme.ui.Button`, while `com.acme` would also admit `com.acmex.Foo`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self.0)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        QualifiedName::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        QualifiedName(name)
    }
}

impl Borrow<str> for QualifiedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
