//! Error types for cheap-stats
//!
//! Every fallible entry point returns a [`StatsError`]. Bindings that cannot
//! carry a Rust enum across the boundary use [`StatsError::code`], which maps
//! each kind onto a stable [`ErrorCode`].

use thiserror::Error;

/// Main error type for cheap-stats operations
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum StatsError {
    /// A required argument was missing or unusable
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Fewer samples than the statistical validity floor
    #[error("Too few samples: got {count}, need at least {min}")]
    TooFewSamples { count: u64, min: u64 },

    /// Allocation failed while copying the samples
    #[error("Out of memory: failed to allocate {requested} samples")]
    OutOfMemory { requested: u64 },

    /// The configuration could not be loaded or is out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl StatsError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        StatsError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Stable integer code for this error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            StatsError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            StatsError::TooFewSamples { .. } => ErrorCode::TooFewSamples,
            StatsError::OutOfMemory { .. } => ErrorCode::OutOfMemory,
            StatsError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
        }
    }
}

impl From<ConfigError> for StatsError {
    fn from(e: ConfigError) -> Self {
        StatsError::InvalidConfig {
            reason: e.to_string(),
        }
    }
}

/// Closed set of error codes handed to foreign callers.
///
/// Zero is reserved for success so the values can be returned directly from a
/// C-style status function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    InvalidArgument = 1,
    TooFewSamples = 2,
    OutOfMemory = 3,
    InvalidConfig = 4,
}

impl ErrorCode {
    /// Raw integer value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.as_i32()
    }
}

/// Errors that can occur when loading a [`StatsConfig`](crate::StatsConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("min_samples must be at least {floor}, got {value}")]
    MinSamplesTooLow { value: usize, floor: usize },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Result type alias for cheap-stats operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
