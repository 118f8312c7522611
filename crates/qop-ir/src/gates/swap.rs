//! Exchange gates: `SWAP**t` and `ISWAP**t`.

use super::controlled::CNotPowGate;
use super::eigen::{Decomposition, EigenComponent, EigenFamily, PowGate};
use super::hadamard::HPowGate;
use super::pauli::ZPowGate;
use super::{basis_projector, ket};
use crate::diagram::DiagramArgs;
use crate::error::IrResult;
use crate::gate::GateExt;
use crate::matrix::{Matrix, projector};
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Family marker for [`SwapPowGate`].
#[derive(Debug)]
pub enum Swap {}

/// Family marker for [`ISwapPowGate`].
#[derive(Debug)]
pub enum ISwap {}

/// `SWAP**t`.
pub type SwapPowGate = PowGate<Swap>;

/// `ISWAP**t`: swaps `|01⟩` and `|10⟩` with a phase of `i` at exponent 1.
pub type ISwapPowGate = PowGate<ISwap>;

fn symmetric() -> Matrix {
    projector(&ket(&[0.0, 1.0, 1.0, 0.0]))
}

fn antisymmetric() -> Matrix {
    projector(&ket(&[0.0, 1.0, -1.0, 0.0]))
}

impl EigenFamily for Swap {
    const NAME: &'static str = "SWAP";
    const NUM_QUBITS: usize = 2;
    const DECOMPOSITION: Option<Decomposition<Self>> = Some(decompose_swap);

    fn eigen_components() -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, basis_projector(4, &[0, 3]) + symmetric()),
            EigenComponent::new(1.0, antisymmetric()),
        ]
    }

    fn wire_symbols(args: &DiagramArgs) -> Vec<String> {
        let symbol = if args.use_unicode { "×" } else { "swap" };
        vec![symbol.into(), symbol.into()]
    }
}

impl EigenFamily for ISwap {
    const NAME: &'static str = "ISWAP";
    const NUM_QUBITS: usize = 2;
    const DECOMPOSITION: Option<Decomposition<Self>> = Some(decompose_iswap);

    fn eigen_components() -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, basis_projector(4, &[0, 3])),
            EigenComponent::new(0.5, symmetric()),
            EigenComponent::new(-0.5, antisymmetric()),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["iSwap".into(), "iSwap".into()]
    }

    fn decomposes(gate: &ISwapPowGate) -> bool {
        gate.global_shift() == 0.0
    }
}

impl SwapPowGate {
    /// The SWAP gate.
    pub fn swap() -> Self {
        Self::new(1.0)
    }
}

impl ISwapPowGate {
    /// The ISWAP gate.
    pub fn iswap() -> Self {
        Self::new(1.0)
    }
}

fn decompose_swap(gate: &SwapPowGate, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
    let (a, b) = (qubits[0].clone(), qubits[1].clone());
    Ok(vec![
        CNotPowGate::cnot().on([a.clone(), b.clone()])?,
        CNotPowGate::with_global_shift(gate.exponent(), gate.global_shift())
            .on([b.clone(), a.clone()])?,
        CNotPowGate::cnot().on([a, b])?,
    ])
}

fn decompose_iswap(gate: &ISwapPowGate, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
    let (a, b) = (qubits[0].clone(), qubits[1].clone());
    let half = gate.exponent() / 2.0;
    Ok(vec![
        CNotPowGate::cnot().on([a.clone(), b.clone()])?,
        HPowGate::h().on([a.clone()])?,
        CNotPowGate::cnot().on([b.clone(), a.clone()])?,
        ZPowGate::new(half).on([a.clone()])?,
        CNotPowGate::cnot().on([b.clone(), a.clone()])?,
        ZPowGate::new(-half).on([a.clone()])?,
        HPowGate::h().on([a.clone()])?,
        CNotPowGate::cnot().on([a, b])?,
    ])
}
