//! AST node definitions.
//!
//! Declarations (`TypeDecl`, `MethodDecl`, `Param`) come from the external
//! front-end or are synthesized by processors. Body nodes (`Block`, `Stmt`,
//! `Expr`) model only the vocabulary generated code needs; parsed bodies
//! keep their statements as opaque source fragments.

mod body;
mod decl;

pub use body::{Block, Expr, Stmt};
pub use decl::{MethodDecl, Param, TypeDecl};
