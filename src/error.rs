//! Error types for wave spectrum estimation

use std::fmt;

/// Errors that can occur while estimating spectra
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// No power of two representable in `usize` is large enough for the request
    SizingOverflow {
        /// Requested element count
        requested: usize,
    },

    /// A buffer or transform scratch space could not be allocated
    AllocationFailure {
        /// Number of elements that were requested
        elements: usize,
    },

    /// Two sequences that must be elementwise-compatible differ in length
    LengthMismatch {
        /// Length of the reference sequence
        expected: usize,
        /// Length of the offending sequence
        actual: usize,
    },

    /// Invalid input parameters
    InvalidInput(String),

    /// A sample file could not be opened or read
    Io {
        /// Path of the file
        path: String,
        /// Underlying error message
        message: String,
    },

    /// A token in a sample file is not a floating point number
    Parse {
        /// Path of the file
        path: String,
        /// Zero-based index of the value in the file
        index: usize,
        /// The offending token
        token: String,
    },
}

impl fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumError::SizingOverflow { requested } => write!(
                f,
                "Sizing overflow: no representable power of two holds {} elements",
                requested
            ),
            SpectrumError::AllocationFailure { elements } => write!(
                f,
                "Allocation failure: could not allocate {} elements; reduce the input size",
                elements
            ),
            SpectrumError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected {} elements, found {}",
                expected, actual
            ),
            SpectrumError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SpectrumError::Io { path, message } => {
                write!(f, "I/O error reading '{}': {}", path, message)
            }
            SpectrumError::Parse { path, index, token } => write!(
                f,
                "Parse error in '{}': value {} ('{}') is not a number",
                path, index, token
            ),
        }
    }
}

impl std::error::Error for SpectrumError {}
