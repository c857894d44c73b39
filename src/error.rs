//! Error types for legalization
//!
//! Every failure in this crate is a contract violation: there is nothing to
//! retry, so errors always propagate to the immediate caller.

use thiserror::Error;

use crate::quantum::GateKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LegalizeError {
    /// A gate parameter was NaN or infinite
    #[error("Invalid argument: {gate} parameter must be finite, got {value}")]
    InvalidArgument { gate: GateKind, value: f64 },

    /// No rewrite rule handles this gate kind; the instruction must be kept as is
    #[error("Unsupported operation: no rewrite rule for {0}")]
    UnsupportedOperation(GateKind),

    #[error("Qubit index {qubit} out of range for a {qubit_count}-qubit circuit")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    #[error("Gate {gate} acts on {expected} qubits, but {found} qubits were specified")]
    ArityMismatch {
        gate: GateKind,
        expected: usize,
        found: usize,
    },

    #[error("Qubit {0} specified more than once")]
    DuplicateQubit(usize),

    #[error("Qubit count mismatch: {left} and {right}")]
    QubitCountMismatch { left: usize, right: usize },

    #[error("Instruction {position} ({gate}) is not in the native gate set")]
    NotNative { position: usize, gate: GateKind },

    #[error("Instruction {position} ({gate}) has parameter {value} outside its native range")]
    ParameterOutOfRange {
        position: usize,
        gate: GateKind,
        value: f64,
    },

    #[error("Invalid angle bound {0}: must be finite and non-negative")]
    InvalidAngleBound(f64),

    /// The opt-in self-check found the output unitary differs from the input
    #[error("Legalized circuit is not equivalent to its input within tolerance {tolerance}")]
    NotEquivalent { tolerance: f64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LegalizeError>;

impl From<serde_json::Error> for LegalizeError {
    fn from(err: serde_json::Error) -> Self {
        LegalizeError::Config(err.to_string())
    }
}
