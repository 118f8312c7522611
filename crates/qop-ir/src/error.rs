//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building or transforming gates and operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate was applied to the wrong number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// The same qubit appears more than once in an operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate being applied.
        gate_name: String,
    },

    /// Exponent cannot be applied to this gate family.
    #[error("Invalid exponent {exponent} for gate '{gate_name}'")]
    InvalidExponent {
        /// Name of the gate.
        gate_name: String,
        /// The rejected exponent.
        exponent: f64,
    },

    /// A decomposition rule was invoked on a gate it does not cover.
    #[error("Gate '{gate_name}' has no decomposition")]
    NotDecomposable {
        /// Name of the gate.
        gate_name: String,
    },

    /// Matrix does not describe a valid gate.
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
