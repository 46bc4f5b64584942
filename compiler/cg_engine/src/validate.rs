//! Structural validation of generated declarations.
//!
//! Walks every declaration in the output registry and checks:
//! - A method without a body is `abstract` or `native`
//! - A method returning a value ends its body with a return statement
//!
//! The engine runs this after the completion phase, so a processor bug
//! that would emit a method with a missing return fails the run instead
//! of reaching the printer.

use cg_ir::visitor::{walk_type_decl, Visitor};
use cg_ir::{MethodDecl, QualifiedName, TypeDecl};

use crate::{GenError, GenResult, OutputRegistry};

/// Validate every generated declaration, reporting the first problem.
pub fn validate_output(output: &OutputRegistry) -> GenResult<()> {
    let mut validator = OutputValidator::default();
    for decl in output {
        validator.visit_type_decl(decl);
        if let Some(err) = validator.error.take() {
            return Err(err);
        }
    }
    Ok(())
}

#[derive(Default)]
struct OutputValidator<'ast> {
    class: Option<&'ast QualifiedName>,
    error: Option<GenError>,
}

impl OutputValidator<'_> {
    fn fail(&mut self, method: &MethodDecl, reason: &str) {
        if self.error.is_some() {
            return;
        }
        let class = self
            .class
            .cloned()
            .unwrap_or_else(|| QualifiedName::new(""));
        self.error = Some(GenError::InvalidOutput {
            class,
            method: method.name.clone(),
            reason: reason.to_owned(),
        });
    }
}

impl<'ast> Visitor<'ast> for OutputValidator<'ast> {
    fn visit_type_decl(&mut self, decl: &'ast TypeDecl) {
        self.class = Some(decl.name());
        walk_type_decl(self, decl);
    }

    fn visit_method(&mut self, method: &'ast MethodDecl) {
        match &method.body {
            None if !method.modifiers.is_bodyless() => {
                self.fail(method, "missing body");
            }
            Some(body) if !method.return_type.is_void() => {
                if !body.last().is_some_and(|stmt| stmt.is_return()) {
                    self.fail(method, "value-returning body does not end in a return");
                }
            }
            _ => {}
        }
    }
}
