//! Doubly-controlled powers: `CCZ**t` and `CCX**t`.

use super::controlled::CNotPowGate;
use super::eigen::{Decomposition, EigenComponent, EigenFamily, PowGate};
use super::hadamard::HPowGate;
use super::pauli::ZPowGate;
use super::{basis_projector, ket};
use crate::diagram::DiagramArgs;
use crate::error::IrResult;
use crate::gate::GateExt;
use crate::matrix::projector;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Family marker for [`CCZPowGate`].
#[derive(Debug)]
pub enum DoublyControlledZ {}

/// Family marker for [`CCXPowGate`].
#[derive(Debug)]
pub enum DoublyControlledX {}

/// `CCZ**t`: phases `|111⟩` by `exp(iπt)`.
pub type CCZPowGate = PowGate<DoublyControlledZ>;

/// `CCX**t` (Toffoli): applies `X**t` to the third qubit when both controls are `|1⟩`.
pub type CCXPowGate = PowGate<DoublyControlledX>;

impl EigenFamily for DoublyControlledZ {
    const NAME: &'static str = "CCZ";
    const NUM_QUBITS: usize = 3;
    const DECOMPOSITION: Option<Decomposition<Self>> = Some(decompose_ccz);

    fn eigen_components() -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, basis_projector(8, &[0, 1, 2, 3, 4, 5, 6])),
            EigenComponent::new(1.0, basis_projector(8, &[7])),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["@".into(), "@".into(), "@".into()]
    }

    fn decomposes(gate: &CCZPowGate) -> bool {
        gate.global_shift() == 0.0
    }
}

impl EigenFamily for DoublyControlledX {
    const NAME: &'static str = "CCX";
    const NUM_QUBITS: usize = 3;
    const DECOMPOSITION: Option<Decomposition<Self>> = Some(decompose_ccx);

    fn eigen_components() -> Vec<EigenComponent> {
        let plus = basis_projector(8, &[0, 1, 2, 3, 4, 5])
            + projector(&ket(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0]));
        let minus = projector(&ket(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0]));
        vec![
            EigenComponent::new(0.0, plus),
            EigenComponent::new(1.0, minus),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["@".into(), "@".into(), "X".into()]
    }
}

impl CCZPowGate {
    /// The doubly-controlled Z gate.
    pub fn ccz() -> Self {
        Self::new(1.0)
    }
}

impl CCXPowGate {
    /// The Toffoli gate.
    pub fn ccx() -> Self {
        Self::new(1.0)
    }
}

/// Phase polynomial over `T**t` rotations and CNOT ladders.
fn decompose_ccz(gate: &CCZPowGate, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
    let (a, b, c) = (qubits[0].clone(), qubits[1].clone(), qubits[2].clone());
    let quarter = gate.exponent() / 4.0;
    let p = |q: &QubitId| ZPowGate::new(quarter).on([q.clone()]);
    let p_inv = |q: &QubitId| ZPowGate::new(-quarter).on([q.clone()]);
    let ab = || CNotPowGate::cnot().on([a.clone(), b.clone()]);
    let bc = || CNotPowGate::cnot().on([b.clone(), c.clone()]);

    Ok(vec![
        p(&a)?,
        p(&b)?,
        p(&c)?,
        ab()?,
        bc()?,
        p_inv(&b)?,
        p(&c)?,
        ab()?,
        bc()?,
        p_inv(&c)?,
        ab()?,
        bc()?,
        p_inv(&c)?,
        ab()?,
        bc()?,
    ])
}

/// Conjugate `CCZ**t` on the target with Hadamards.
fn decompose_ccx(gate: &CCXPowGate, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
    let target = [qubits[2].clone()];
    Ok(vec![
        HPowGate::h().on(target.clone())?,
        CCZPowGate::with_global_shift(gate.exponent(), gate.global_shift())
            .on(qubits.iter().cloned())?,
        HPowGate::h().on(target)?,
    ])
}
