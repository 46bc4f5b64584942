//! Driver configuration from command-line arguments.

use std::fs;
use std::path::{Path, PathBuf};

use cg_engine::BuilderConfig;

use crate::DriverError;

/// Environment fallback for `--scope`.
pub const SCOPE_ENV: &str = "CG_SCOPE";

/// Options for `cgc run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Model file with the input declarations.
    pub input: PathBuf,
    /// Destination for the generated declarations.
    pub output: PathBuf,
    pub builder: BuilderConfig,
}

impl DriverConfig {
    /// Input and output must differ, otherwise generated output would be
    /// read back as input on the next run.
    ///
    /// Paths are compared after resolving them on disk, so `dir/model.json`
    /// and `dir/sub/../model.json` are the same file.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.input == self.output || resolve(&self.input) == resolve(&self.output) {
            return Err(DriverError::Config(format!(
                "input and output are the same file: {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}

/// Canonical form of `path`.
///
/// A file that does not exist yet resolves through its parent directory.
/// Falls back to the path as given when neither exists.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_owned(),
    }
}

/// Parse the arguments following `run`.
///
/// Recognized: `--input=<path>`, `--output=<path>`, `--scope=<prefix>`,
/// `--suffix=<suffix>`, `--strict`. `env_scope` is used when `--scope` is
/// absent.
pub fn parse_run_args(args: &[String], env_scope: Option<String>) -> Result<DriverConfig, DriverError> {
    let mut input = None;
    let mut output = None;
    let mut scope = None;
    let mut suffix = None;
    let mut strict = false;

    for arg in args {
        if let Some(path) = arg.strip_prefix("--input=") {
            input = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--output=") {
            output = Some(PathBuf::from(path));
        } else if let Some(prefix) = arg.strip_prefix("--scope=") {
            scope = Some(prefix.to_owned());
        } else if let Some(value) = arg.strip_prefix("--suffix=") {
            suffix = Some(value.to_owned());
        } else if arg == "--strict" {
            strict = true;
        } else {
            return Err(DriverError::Config(format!("unknown option: {arg}")));
        }
    }

    let input = input.ok_or_else(|| DriverError::Config("missing --input".to_owned()))?;
    let output = output.ok_or_else(|| DriverError::Config("missing --output".to_owned()))?;
    let scope = scope.or(env_scope).ok_or_else(|| {
        DriverError::Config(format!("missing --scope (or {SCOPE_ENV})"))
    })?;

    let mut builder = BuilderConfig::new(scope).strict(strict);
    if let Some(suffix) = suffix {
        if suffix.is_empty() {
            return Err(DriverError::Config("--suffix must not be empty".to_owned()));
        }
        builder = builder.with_suffix(suffix);
    }

    let config = DriverConfig {
        input,
        output,
        builder,
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests;
