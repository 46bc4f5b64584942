//! Processors shipped with the engine.

mod builder;

pub use builder::{builder_method, is_setter, BuilderConfig, BuilderProcessor};
