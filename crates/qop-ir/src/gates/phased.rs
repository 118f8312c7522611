//! X rotations about an axis in the XY plane.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::eigen::canonicalize_exponent;
use super::pauli::{XPowGate, ZPowGate};
use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::error::{IrError, IrResult};
use crate::gate::{
    DecomposableGate, DiagrammableGate, ExtrapolatableGate, Gate, GateExt, GateRef, UnitaryGate,
    hash_f64,
};
use crate::matrix::Matrix;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// `Z**p · X**t · Z**-p`.
///
/// Both parameters live in `(-1, 1]`.
#[derive(Debug, Clone)]
pub struct PhasedXPowGate {
    phase_exponent: f64,
    exponent: f64,
}

impl PhasedXPowGate {
    /// Create a gate, canonicalizing both parameters.
    ///
    /// # Panics
    ///
    /// Panics if either parameter is not finite. Use [`Self::try_new`] for
    /// untrusted input.
    pub fn new(phase_exponent: f64, exponent: f64) -> Self {
        assert!(
            phase_exponent.is_finite() && exponent.is_finite(),
            "PhX needs finite parameters, got {phase_exponent} and {exponent}",
        );
        Self::canonical(phase_exponent, exponent)
    }

    /// Create a gate, rejecting non-finite parameters.
    pub fn try_new(phase_exponent: f64, exponent: f64) -> IrResult<Self> {
        for value in [phase_exponent, exponent] {
            if !value.is_finite() {
                return Err(IrError::InvalidExponent {
                    gate_name: "PhX".to_string(),
                    exponent: value,
                });
            }
        }
        Ok(Self::canonical(phase_exponent, exponent))
    }

    fn canonical(phase_exponent: f64, exponent: f64) -> Self {
        Self {
            phase_exponent: canonicalize_exponent(phase_exponent, Some(2.0)),
            exponent: canonicalize_exponent(exponent, Some(2.0)),
        }
    }

    /// Axis angle in half-turns.
    pub fn phase_exponent(&self) -> f64 {
        self.phase_exponent
    }

    /// Rotation amount in half-turns.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl PartialEq for PhasedXPowGate {
    fn eq(&self, other: &Self) -> bool {
        self.phase_exponent == other.phase_exponent && self.exponent == other.exponent
    }
}

impl Hash for PhasedXPowGate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.phase_exponent, state);
        hash_f64(self.exponent, state);
    }
}

impl fmt::Display for PhasedXPowGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhX({})", self.phase_exponent)?;
        if self.exponent != 1.0 {
            write!(f, "**{}", self.exponent)?;
        }
        Ok(())
    }
}

impl Gate for PhasedXPowGate {
    fn num_qubits(&self) -> usize {
        1
    }

    fn as_unitary(&self) -> Option<&dyn UnitaryGate> {
        Some(self)
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

impl UnitaryGate for PhasedXPowGate {
    fn unitary(&self) -> Matrix {
        let z = ZPowGate::new(self.phase_exponent).unitary();
        let x = XPowGate::new(self.exponent).unitary();
        let z_inv = ZPowGate::new(-self.phase_exponent).unitary();
        z.dot(&x).dot(&z_inv)
    }
}

impl DecomposableGate for PhasedXPowGate {
    fn decompose(&self, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
        let q = || qubits.iter().cloned();
        Ok(vec![
            ZPowGate::new(-self.phase_exponent).on(q())?,
            XPowGate::new(self.exponent).on(q())?,
            ZPowGate::new(self.phase_exponent).on(q())?,
        ])
    }
}

impl ExtrapolatableGate for PhasedXPowGate {
    fn pow(&self, exponent: f64) -> IrResult<GateRef> {
        if !exponent.is_finite() {
            return Err(IrError::InvalidExponent {
                gate_name: self.to_string(),
                exponent,
            });
        }
        Ok(Arc::new(Self::try_new(
            self.phase_exponent,
            self.exponent * exponent,
        )?))
    }
}

impl DiagrammableGate for PhasedXPowGate {
    fn diagram_info(&self, args: &DiagramArgs) -> DiagramInfo {
        DiagramInfo::per_qubit([format!("PhX({})", args.format_real(self.phase_exponent))])
            .with_exponent(self.exponent)
    }
}
