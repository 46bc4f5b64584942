//! AST Visitor Pattern
//!
//! Provides generic read-only traversal of declarations and method bodies.
//!
//! # Design
//!
//! A single `Visitor` trait is provided. The visitor can mutate its own
//! state during traversal, but the AST remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes.
//!
//! # Example
//!
//! ```text
//! struct CountReturns {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountReturns {
//!     fn visit_stmt(&mut self, stmt: &'ast Stmt) {
//!         if stmt.is_return() {
//!             self.count += 1;
//!         }
//!         walk_stmt(self, stmt);
//!     }
//! }
//! ```

use crate::{Block, Expr, MethodDecl, Param, Stmt, TypeDecl};

// Visitor Trait

/// AST Visitor trait.
///
/// Override `visit_*` methods to add custom behavior at specific nodes.
/// Call `walk_*` functions to continue traversal into children.
pub trait Visitor<'ast> {
    /// Visit a type declaration.
    fn visit_type_decl(&mut self, decl: &'ast TypeDecl) {
        walk_type_decl(self, decl);
    }

    /// Visit a method declaration.
    fn visit_method(&mut self, method: &'ast MethodDecl) {
        walk_method(self, method);
    }

    /// Visit a parameter.
    fn visit_param(&mut self, param: &'ast Param) {
        // Parameters have no child nodes
        let _ = param;
    }

    /// Visit a method body.
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        // Expressions are leaves
        let _ = expr;
    }
}

// Walk Functions

/// Walk all members of a type declaration.
pub fn walk_type_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast TypeDecl) {
    for method in decl.methods() {
        visitor.visit_method(method);
    }
}

/// Walk parameters and body of a method.
pub fn walk_method<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, method: &'ast MethodDecl) {
    for param in &method.params {
        visitor.visit_param(param);
    }
    if let Some(body) = &method.body {
        visitor.visit_block(body);
    }
}

/// Walk the statements of a block.
pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

/// Walk the operand of a statement.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Return(expr) | Stmt::Expr(expr) => visitor.visit_expr(expr),
        Stmt::Opaque(_) => {}
    }
}
