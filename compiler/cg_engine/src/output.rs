//! Output registry for newly synthesized declarations.

use std::collections::hash_map::Entry;

use cg_ir::{Modifiers, QualifiedName, TypeDecl};
use rustc_hash::FxHashMap;

use crate::{GenError, GenResult};

/// Declarations created during one engine run, keyed by qualified name.
///
/// Iteration follows registration order, so two runs over identical input
/// produce identical output order. A second registration under a name
/// already present fails with [`GenError::DuplicateOutputName`].
#[derive(Clone, Debug, Default)]
pub struct OutputRegistry {
    decls: Vec<TypeDecl>,
    /// Map from qualified name to index in `decls`.
    index: FxHashMap<QualifiedName, usize>,
}

impl OutputRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register an empty class.
    ///
    /// Returns the new declaration so the caller can append members.
    pub fn create_class(
        &mut self,
        name: QualifiedName,
        modifiers: Modifiers,
    ) -> GenResult<&mut TypeDecl> {
        self.register(TypeDecl::class(name, modifiers))
    }

    /// Register a fully built declaration.
    pub fn register(&mut self, decl: TypeDecl) -> GenResult<&mut TypeDecl> {
        match self.index.entry(decl.name().clone()) {
            Entry::Occupied(slot) => Err(GenError::DuplicateOutputName {
                name: slot.key().clone(),
            }),
            Entry::Vacant(slot) => {
                let idx = self.decls.len();
                slot.insert(idx);
                self.decls.push(decl);
                Ok(&mut self.decls[idx])
            }
        }
    }

    /// Look up a generated declaration.
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.index.get(name).map(|&idx| &self.decls[idx])
    }

    /// Look up a generated declaration for further mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TypeDecl> {
        match self.index.get(name) {
            Some(&idx) => Some(&mut self.decls[idx]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declarations in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeDecl> {
        self.decls.iter()
    }

    /// Qualified names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.decls.iter().map(TypeDecl::name)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Hand ownership of the generated declarations to the caller.
    pub fn into_decls(self) -> Vec<TypeDecl> {
        self.decls
    }
}

impl<'a> IntoIterator for &'a OutputRegistry {
    type Item = &'a TypeDecl;
    type IntoIter = std::slice::Iter<'a, TypeDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
