//! Codegen driver.
//!
//! Loads a model file (a JSON array of type declarations produced by an
//! external front-end), runs the engine with the builder processor, and
//! writes the generated declarations as a JSON array in registration order.
//!
//! # Debugging
//!
//! - `RUST_LOG=cg_engine=debug`: engine phases and per-class builder output.
//! - `RUST_LOG=cg_engine=trace`: every match and every mirrored setter.

mod config;
mod driver;

pub use config::{parse_run_args, DriverConfig, SCOPE_ENV};
pub use driver::{load_units, run, write_output, DriverError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=cg_engine=debug` or `RUST_LOG=cg_engine=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
