//! Controlled two-qubit powers: `CZ**t` and `CNOT**t`.

use super::eigen::{Decomposition, EigenComponent, EigenFamily, PowGate};
use super::pauli::YPowGate;
use super::{basis_projector, ket};
use crate::diagram::DiagramArgs;
use crate::error::IrResult;
use crate::gate::GateExt;
use crate::matrix::projector;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Family marker for [`CZPowGate`].
#[derive(Debug)]
pub enum ControlledZ {}

/// Family marker for [`CNotPowGate`].
#[derive(Debug)]
pub enum ControlledX {}

/// `CZ**t`: phases `|11⟩` by `exp(iπt)`.
pub type CZPowGate = PowGate<ControlledZ>;

/// `CNOT**t`: applies `X**t` to the second qubit when the first is `|1⟩`.
pub type CNotPowGate = PowGate<ControlledX>;

impl EigenFamily for ControlledZ {
    const NAME: &'static str = "CZ";
    const NUM_QUBITS: usize = 2;

    fn eigen_components() -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, basis_projector(4, &[0, 1, 2])),
            EigenComponent::new(1.0, basis_projector(4, &[3])),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["@".into(), "@".into()]
    }
}

impl EigenFamily for ControlledX {
    const NAME: &'static str = "CNOT";
    const NUM_QUBITS: usize = 2;
    const DECOMPOSITION: Option<Decomposition<Self>> = Some(decompose_cnot);

    fn eigen_components() -> Vec<EigenComponent> {
        let plus = basis_projector(4, &[0, 1]) + projector(&ket(&[0.0, 0.0, 1.0, 1.0]));
        vec![
            EigenComponent::new(0.0, plus),
            EigenComponent::new(1.0, projector(&ket(&[0.0, 0.0, 1.0, -1.0]))),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["@".into(), "X".into()]
    }
}

impl CZPowGate {
    /// The controlled-Z gate.
    pub fn cz() -> Self {
        Self::new(1.0)
    }
}

impl CNotPowGate {
    /// The controlled-NOT gate.
    pub fn cnot() -> Self {
        Self::new(1.0)
    }
}

/// Conjugate `CZ**t` on the target with `Y**∓0.5`.
fn decompose_cnot(gate: &CNotPowGate, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
    let target = [qubits[1].clone()];
    Ok(vec![
        YPowGate::new(-0.5).on(target.clone())?,
        CZPowGate::with_global_shift(gate.exponent(), gate.global_shift())
            .on(qubits.iter().cloned())?,
        YPowGate::new(0.5).on(target)?,
    ])
}
