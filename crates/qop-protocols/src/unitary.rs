//! Unitary resolver.

use qop_ir::{Capability, Capable, Matrix};
use tracing::debug;

use crate::error::{ProtocolError, ProtocolResult};

/// The matrix of a gate (in its own qubit order) or an operation (in the
/// operation's qubit order).
///
/// Fails with [`ProtocolError::CapabilityUnsupported`] when the value has no
/// unitary.
pub fn unitary<V: Capable + ?Sized>(value: &V) -> ProtocolResult<Matrix> {
    value.query_unitary().ok_or_else(|| {
        debug!("No unitary for {}", value.describe());
        ProtocolError::CapabilityUnsupported {
            capability: Capability::Unitary,
            value: value.describe(),
        }
    })
}

/// The matrix, or `None` when the value has no unitary.
pub fn try_unitary<V: Capable + ?Sized>(value: &V) -> Option<Matrix> {
    value.query_unitary()
}

/// The matrix, or `default` when the value has no unitary.
pub fn unitary_or<V: Capable + ?Sized>(value: &V, default: Matrix) -> Matrix {
    value.query_unitary().unwrap_or(default)
}

/// Whether the value exposes a unitary.
pub fn has_unitary<V: Capable + ?Sized>(value: &V) -> bool {
    value.capability_set().contains(Capability::Unitary)
}
