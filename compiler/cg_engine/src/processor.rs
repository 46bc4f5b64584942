//! The processor contract.

use cg_ir::TypeDecl;

use crate::{GenResult, OutputRegistry};

/// A registered transformation rule.
///
/// The engine calls `is_applicable` for every input declaration and
/// `process` for each one that matches. After every declaration has been
/// visited, `on_complete` runs exactly once, whether or not the processor
/// matched anything.
///
/// Processors never mutate their input; they only register new
/// declarations into the output registry they are handed.
pub trait Processor {
    /// Unique registration name (e.g., "builder").
    fn name(&self) -> &str;

    /// Whether this processor applies to `decl`.
    ///
    /// An error aborts the run like a failing `process` call; it is never
    /// treated as "not applicable".
    fn is_applicable(&self, decl: &TypeDecl) -> GenResult<bool>;

    /// Transform a matching declaration.
    fn process(&mut self, decl: &TypeDecl, output: &mut OutputRegistry) -> GenResult<()>;

    /// Called once after traversal.
    ///
    /// The registry is read-only here: a completion hook can report on
    /// generated output but cannot add to it.
    fn on_complete(&mut self, output: &OutputRegistry) -> GenResult<()> {
        let _ = output;
        Ok(())
    }
}
