//! Single-qubit Pauli powers and rotations.

use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex64;

use super::eigen::{EigenComponent, EigenFamily, PowGate, default_fmt};
use super::{basis_projector, ket};
use crate::diagram::DiagramArgs;
use crate::matrix::projector;

/// Family marker for [`XPowGate`].
#[derive(Debug)]
pub enum PauliX {}

/// Family marker for [`YPowGate`].
#[derive(Debug)]
pub enum PauliY {}

/// Family marker for [`ZPowGate`].
#[derive(Debug)]
pub enum PauliZ {}

/// `X**t`: rotation about the X axis in half-turns.
pub type XPowGate = PowGate<PauliX>;

/// `Y**t`: rotation about the Y axis in half-turns.
pub type YPowGate = PowGate<PauliY>;

/// `Z**t`: phase rotation in half-turns.
pub type ZPowGate = PowGate<PauliZ>;

impl EigenFamily for PauliX {
    const NAME: &'static str = "X";
    const NUM_QUBITS: usize = 1;

    fn eigen_components() -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, projector(&ket(&[1.0, 1.0]))),
            EigenComponent::new(1.0, projector(&ket(&[1.0, -1.0]))),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["X".into()]
    }

    fn rotation_name() -> Option<&'static str> {
        Some("Rx")
    }
}

impl EigenFamily for PauliY {
    const NAME: &'static str = "Y";
    const NUM_QUBITS: usize = 1;

    fn eigen_components() -> Vec<EigenComponent> {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let plus_i = [Complex64::new(h, 0.0), Complex64::new(0.0, h)];
        let minus_i = [Complex64::new(h, 0.0), Complex64::new(0.0, -h)];
        vec![
            EigenComponent::new(0.0, projector(&plus_i)),
            EigenComponent::new(1.0, projector(&minus_i)),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["Y".into()]
    }

    fn rotation_name() -> Option<&'static str> {
        Some("Ry")
    }
}

impl EigenFamily for PauliZ {
    const NAME: &'static str = "Z";
    const NUM_QUBITS: usize = 1;

    fn eigen_components() -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, basis_projector(2, &[0])),
            EigenComponent::new(1.0, basis_projector(2, &[1])),
        ]
    }

    fn wire_symbols(_args: &DiagramArgs) -> Vec<String> {
        vec!["Z".into()]
    }

    fn rotation_name() -> Option<&'static str> {
        Some("Rz")
    }

    fn fmt_gate(gate: &ZPowGate, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMED: [(f64, &str); 4] = [(0.5, "S"), (-0.5, "S**-1"), (0.25, "T"), (-0.25, "T**-1")];

        let named = NAMED
            .iter()
            .find(|(exponent, _)| gate.global_shift() == 0.0 && gate.exponent() == *exponent);
        match named {
            Some((_, name)) => f.write_str(name),
            None => default_fmt(Self::NAME, gate, f),
        }
    }
}

impl XPowGate {
    /// The Pauli X gate.
    pub fn x() -> Self {
        Self::new(1.0)
    }

    /// `exp(-iXθ/2)`.
    pub fn rx(radians: f64) -> Self {
        Self::with_global_shift(radians / PI, -0.5)
    }
}

impl YPowGate {
    /// The Pauli Y gate.
    pub fn y() -> Self {
        Self::new(1.0)
    }

    /// `exp(-iYθ/2)`.
    pub fn ry(radians: f64) -> Self {
        Self::with_global_shift(radians / PI, -0.5)
    }
}

impl ZPowGate {
    /// The Pauli Z gate.
    pub fn z() -> Self {
        Self::new(1.0)
    }

    /// `Z**0.5`.
    pub fn s() -> Self {
        Self::new(0.5)
    }

    /// `Z**0.25`.
    pub fn t() -> Self {
        Self::new(0.25)
    }

    /// `exp(-iZθ/2)`.
    pub fn rz(radians: f64) -> Self {
        Self::with_global_shift(radians / PI, -0.5)
    }
}
