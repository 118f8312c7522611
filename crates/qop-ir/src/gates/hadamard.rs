//! Hadamard powers.

use std::f64::consts::PI;

use super::eigen::{Decomposition, EigenComponent, EigenFamily, PowGate};
use super::ket;
use super::pauli::{XPowGate, YPowGate};
use crate::diagram::DiagramArgs;
use crate::error::IrResult;
use crate::gate::GateExt;
use crate::matrix::projector;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Family marker for [`HPowGate`].
#[derive(Debug)]
pub enum Hadamard {}

/// `H**t`.
pub type HPowGate = PowGate<Hadamard>;

impl EigenFamily for Hadamard {
    const NAME: &'static str = "H";
    const NUM_QUBITS: usize = 1;
    const DECOMPOSITION: Option<Decomposition<Self>> = Some(decompose_h);

    fn eigen_components() -> Vec<EigenComponent> {
        let (cos, sin) = ((PI / 8.0).cos(), (PI / 8.0).sin());
        vec![
            EigenComponent::new(0.0, projector(&ket(&[cos, sin]))),
            EigenComponent::new(1.0, projector(&ket(&[-sin, cos]))),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["H".into()]
    }

    /// Only the plain Hadamard has a known rewrite.
    fn decomposes(gate: &HPowGate) -> bool {
        gate.exponent() == 1.0 && gate.global_shift() == 0.0
    }
}

impl HPowGate {
    /// The Hadamard gate.
    pub fn h() -> Self {
        Self::new(1.0)
    }
}

/// `H = X·Y**0.5` with the phase of `X` shifted so the identity is exact.
fn decompose_h(_gate: &HPowGate, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
    Ok(vec![
        YPowGate::new(0.5).on(qubits.iter().cloned())?,
        XPowGate::with_global_shift(1.0, -0.25).on(qubits.iter().cloned())?,
    ])
}
