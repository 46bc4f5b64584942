//! Codegen Engine - processor traversal and dispatch.
//!
//! This crate provides:
//! - The `Processor` contract (applicability predicate, action, completion hook)
//! - `ProcessorRegistry` holding processors in registration order
//! - `OutputRegistry` collecting newly synthesized declarations by qualified name
//! - `run`, the two-phase traversal engine
//! - Output validation for generated declarations
//! - The shipped builder synthesis processor
//!
//! # Architecture
//!
//! ```text
//! units ──► for each decl ──► for each processor ──► is_applicable? ──► process
//!                                                                         │
//!                                                         OutputRegistry ◄┘
//! after all decls ──► on_complete (each processor, once) ──► validate ──► OutputRegistry
//! ```
//!
//! Processing is sequential and fail-fast: the first error aborts the run
//! and no partially populated registry is returned.

mod builtins;
mod engine;
mod errors;
mod output;
mod processor;
mod registry;
mod validate;

pub use builtins::{builder_method, is_setter, BuilderConfig, BuilderProcessor};
pub use engine::{run, run_with_stats, RunStats};
pub use errors::{GenError, GenResult};
pub use output::OutputRegistry;
pub use processor::Processor;
pub use registry::ProcessorRegistry;
pub use validate::validate_output;
