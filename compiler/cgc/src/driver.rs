//! Model loading, engine invocation and output writing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use cg_engine::{run_with_stats, BuilderProcessor, GenError, ProcessorRegistry, RunStats};
use cg_ir::TypeDecl;

use crate::DriverConfig;

/// Driver failure. Any of these aborts the build step; no output is written.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: invalid model: {source}", .path.display())]
    Model {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: cannot serialize output: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Gen(#[from] GenError),
}

/// Read a model file: a JSON array of type declarations.
pub fn load_units(path: &Path) -> Result<Vec<TypeDecl>, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DriverError::Model {
        path: path.to_owned(),
        source,
    })
}

/// Write generated declarations as a JSON array.
///
/// The array is written to a temporary file next to `path` and renamed
/// into place, so `path` either keeps its old content or holds the
/// complete output.
pub fn write_output(path: &Path, decls: &[TypeDecl]) -> Result<(), DriverError> {
    let mut text = serde_json::to_string_pretty(decls).map_err(|source| DriverError::Serialize {
        path: path.to_owned(),
        source,
    })?;
    text.push('\n');

    let io_err = |source: std::io::Error| DriverError::Io {
        path: path.to_owned(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    staged.write_all(text.as_bytes()).map_err(io_err)?;
    staged.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

/// Load, generate, write.
///
/// The output file is only written after the engine run succeeded.
#[tracing::instrument(level = "debug", skip_all, fields(input = %config.input.display()))]
pub fn run(config: &DriverConfig) -> Result<RunStats, DriverError> {
    config.validate()?;
    let units = load_units(&config.input)?;
    tracing::debug!(units = units.len(), "model loaded");

    let mut processors = ProcessorRegistry::new();
    processors.register(BuilderProcessor::new(config.builder.clone()))?;

    let (output, stats) = run_with_stats(&units, &mut processors)?;
    write_output(&config.output, &output.into_decls())?;
    tracing::debug!(output = %config.output.display(), "output written");
    Ok(stats)
}
