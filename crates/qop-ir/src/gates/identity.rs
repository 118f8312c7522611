//! The multi-qubit identity.

use std::fmt;
use std::sync::Arc;

use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::error::{IrError, IrResult};
use crate::gate::{
    DecomposableGate, DiagrammableGate, ExtrapolatableGate, Gate, GateRef, UnitaryGate,
};
use crate::matrix::{Matrix, identity};
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Does nothing to `n` qubits. Every power of it is itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityGate {
    num_qubits: usize,
}

impl IdentityGate {
    /// Identity on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self { num_qubits }
    }

    /// Matrix dimension, or `None` when `2^n` does not fit in a `usize`.
    fn dimension(&self) -> Option<usize> {
        u32::try_from(self.num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
    }
}

impl fmt::Display for IdentityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_qubits == 1 {
            f.write_str("I")
        } else {
            write!(f, "I({})", self.num_qubits)
        }
    }
}

impl Gate for IdentityGate {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn as_unitary(&self) -> Option<&dyn UnitaryGate> {
        self.dimension().map(|_| self as &dyn UnitaryGate)
    }

    fn as_decomposable(&self) -> Option<&dyn DecomposableGate> {
        Some(self)
    }

    fn as_extrapolatable(&self) -> Option<&dyn ExtrapolatableGate> {
        Some(self)
    }

    fn as_diagrammable(&self) -> Option<&dyn DiagrammableGate> {
        Some(self)
    }
}

impl UnitaryGate for IdentityGate {
    fn unitary(&self) -> Matrix {
        // Empty when the facet would not have been offered.
        identity(self.dimension().unwrap_or(0))
    }
}

impl DecomposableGate for IdentityGate {
    fn decompose(&self, _qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
        Ok(Vec::new())
    }
}

impl ExtrapolatableGate for IdentityGate {
    fn pow(&self, exponent: f64) -> IrResult<GateRef> {
        if !exponent.is_finite() {
            return Err(IrError::InvalidExponent {
                gate_name: self.to_string(),
                exponent,
            });
        }
        Ok(Arc::new(*self))
    }
}

impl DiagrammableGate for IdentityGate {
    fn diagram_info(&self, _args: &DiagramArgs) -> DiagramInfo {
        DiagramInfo::uniform("I").disconnected()
    }
}
