//! Error types for the protocol algorithms.

use std::fmt;

use qop_ir::{Capability, IrError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the protocol algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The value lacks a capability and no default was supplied.
    #[error("'{value}' does not support {capability}")]
    CapabilityUnsupported {
        /// The missing capability.
        capability: Capability,
        /// Canonical text of the value.
        value: String,
    },

    /// The value (or an element of a sequence) has no inverse.
    #[error("'{value}' is not invertible")]
    NotInvertible {
        /// Canonical text of the value.
        value: String,
    },

    /// Decomposition reached an operation it could neither keep nor expand.
    #[error("Decomposition stuck at '{operation}' (depth {depth}): {reason}")]
    DecompositionStuck {
        /// Canonical text of the offending operation.
        operation: String,
        /// Depth at which it was reached; roots are at depth 0.
        depth: usize,
        /// Why expansion stopped.
        reason: StuckReason,
    },

    /// A per-qubit diagram label has the wrong number of symbols.
    #[error("Diagram info has {got} wire symbols, expected {expected}")]
    MalformedDiagramInfo {
        /// Qubit count the label was requested for.
        expected: usize,
        /// Number of symbols actually returned.
        got: usize,
    },

    /// Structural error from the IR layer.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Why a decomposition could not continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StuckReason {
    /// Neither the intercepting decomposer nor the gate offered a decomposition.
    Undecomposable,
    /// A decomposer returned exactly its input.
    NoProgress,
    /// Expansion was needed beyond the configured depth.
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },
}

impl fmt::Display for StuckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StuckReason::Undecomposable => f.write_str("no decomposition available"),
            StuckReason::NoProgress => f.write_str("decomposer returned its input unchanged"),
            StuckReason::DepthExceeded { max_depth } => {
                write!(f, "maximum depth {max_depth} exceeded")
            }
        }
    }
}

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ProtocolError::CapabilityUnsupported {
            capability: Capability::Unitary,
            value: "M[m](q(0))".into(),
        };
        assert_eq!(err.to_string(), "'M[m](q(0))' does not support UNITARY");

        let err = ProtocolError::DecompositionStuck {
            operation: "CCX(a, b, c)".into(),
            depth: 3,
            reason: StuckReason::DepthExceeded { max_depth: 3 },
        };
        assert_eq!(
            err.to_string(),
            "Decomposition stuck at 'CCX(a, b, c)' (depth 3): maximum depth 3 exceeded"
        );
    }

    #[test]
    fn test_ir_error_conversion() {
        let err: ProtocolError = IrError::InvalidMatrix("bad".into()).into();
        assert!(matches!(err, ProtocolError::Ir(IrError::InvalidMatrix(_))));
    }

    #[test]
    fn test_stuck_reason_serde() {
        let reason = StuckReason::DepthExceeded { max_depth: 8 };
        let json = serde_json::to_string(&reason).unwrap();
        assert_eq!(json, r#"{"depth_exceeded":{"max_depth":8}}"#);
        assert_eq!(
            serde_json::to_string(&StuckReason::NoProgress).unwrap(),
            r#""no_progress""#
        );
    }
}
