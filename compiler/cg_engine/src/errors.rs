//! Error types for engine runs.
//!
//! Every failure aborts the whole run and is surfaced to the caller
//! unchanged. There is no retry and no partial output.

use cg_ir::QualifiedName;

/// Result of an engine operation.
pub type GenResult<T> = Result<T, GenError>;

/// Engine failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    /// A declaration with this qualified name was already generated in
    /// this run. Naming collisions are never resolved by overwriting.
    #[error("duplicate output declaration `{name}`")]
    DuplicateOutputName { name: QualifiedName },

    /// A processor with this name is already registered.
    #[error("processor `{name}` is already registered")]
    DuplicateProcessor { name: String },

    /// A processor action failed.
    #[error("processor `{processor}` failed: {message}")]
    ProcessorFault { processor: String, message: String },

    /// A method eligible by name and return type has no body to mirror.
    #[error("method `{method}` of `{class}` is eligible but has no body")]
    InvalidEligibilityShape {
        class: QualifiedName,
        method: String,
    },

    /// A generated declaration is structurally invalid.
    #[error("generated method `{method}` of `{class}` is invalid: {reason}")]
    InvalidOutput {
        class: QualifiedName,
        method: String,
        reason: String,
    },
}

impl GenError {
    /// Fault raised by a processor's own logic.
    pub fn fault(processor: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::ProcessorFault {
            processor: processor.into(),
            message: message.into(),
        }
    }
}
