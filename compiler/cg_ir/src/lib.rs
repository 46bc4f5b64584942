//! Codegen IR - AST model for the processor engine.
//!
//! This crate contains the node types the engine reads and writes:
//! - Qualified names for type declarations
//! - Type references (`void`, primitives, named types)
//! - Modifier sets
//! - Type and method declarations with parameters and thrown types
//! - Method bodies: blocks, statements, expressions
//! - An immutable method signature view for eligibility predicates
//! - A visitor for read-only traversal
//!
//! # Design Philosophy
//!
//! - **Declaration order everywhere**: members, parameters and thrown types
//!   live in `Vec`s so iteration order is the order the front-end produced.
//! - **No ambient factory**: every node is built by a plain constructor from
//!   its explicit inputs. Registration of new declarations happens through
//!   the output registry owned by the engine.
//! - **Parsed input is read-only**: the engine never mutates a source
//!   declaration; it only creates new sibling declarations.

pub mod ast;
mod modifiers;
mod name;
mod sig;
mod types;
pub mod visitor;

pub use ast::{Block, Expr, MethodDecl, Param, Stmt, TypeDecl};
pub use modifiers::Modifiers;
pub use name::QualifiedName;
pub use sig::MethodSig;
pub use types::{PrimitiveKind, TypeRef};
