//! Error types for generator construction and sampling.
//!
//! Every fallible operation returns [`Result`]; the caller must check it
//! before relying on any output. [`ResultCode`] collapses the error variants
//! into the four-valued status taxonomy used at integration boundaries.

use thiserror::Error;

/// Errors produced by generator construction and sampling.
///
/// # Variants
///
/// - `AllocationFailure`: an output buffer could not be reserved
/// - `HardwareEntropyExhausted`: the entropy source failed every attempt
/// - `ArgumentOutOfBounds`: a sampling parameter is outside its domain
/// - `InvalidKind`: the generator identifier or name is not recognised
///
/// # Examples
///
/// ```
/// use scipack_random::{GeneratorError, ResultCode};
///
/// let err = GeneratorError::ArgumentOutOfBounds {
///     name: "exponent",
///     value: "65".to_string(),
/// };
/// assert!(err.to_string().contains("exponent"));
/// assert_eq!(err.code(), ResultCode::ArgumentOutOfBounds);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Output buffer reservation failed.
    #[error("Failed to allocate an output buffer of {requested} elements")]
    AllocationFailure {
        /// Number of elements requested
        requested: usize,
    },

    /// The hardware entropy source failed on every permitted attempt.
    #[error("Hardware entropy source exhausted after {attempts} attempts")]
    HardwareEntropyExhausted {
        /// Number of attempts made before giving up
        attempts: usize,
    },

    /// A sampling argument lies outside its valid domain.
    #[error("Argument '{name}' out of bounds: {value}")]
    ArgumentOutOfBounds {
        /// Parameter name
        name: &'static str,
        /// Description of the rejected value
        value: String,
    },

    /// Unknown generator kind identifier or name.
    #[error("Invalid generator kind: {0}")]
    InvalidKind(String),
}

impl GeneratorError {
    /// Collapses this error into its [`ResultCode`].
    ///
    /// An invalid kind is an argument bounds failure at the code level.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::AllocationFailure { .. } => ResultCode::AllocationFailure,
            Self::HardwareEntropyExhausted { .. } => ResultCode::HardwareEntropyExhausted,
            Self::ArgumentOutOfBounds { .. } | Self::InvalidKind(_) => {
                ResultCode::ArgumentOutOfBounds
            }
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Status codes reported across integration boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Operation completed.
    Success,
    /// Memory for the output could not be obtained.
    AllocationFailure,
    /// Hardware entropy retries were exhausted.
    HardwareEntropyExhausted,
    /// An argument was outside its valid domain.
    ArgumentOutOfBounds,
}

impl ResultCode {
    /// Returns a stable, human-readable description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Success => "operation terminated successfully",
            Self::AllocationFailure => "memory allocation has failed",
            Self::HardwareEntropyExhausted => "hardware random instruction has failed",
            Self::ArgumentOutOfBounds => "argument outside of valid bounds",
        }
    }

    /// Returns the code of an operation outcome.
    pub fn of<T>(outcome: &Result<T>) -> Self {
        match outcome {
            Ok(_) => Self::Success,
            Err(err) => err.code(),
        }
    }
}

impl From<&GeneratorError> for ResultCode {
    fn from(err: &GeneratorError) -> Self {
        err.code()
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
