//! Gate catalog for the demo binaries.

use clap::ValueEnum;
use qop_ir::gates::{
    CCXPowGate, CCZPowGate, CNotPowGate, CZPowGate, HPowGate, ISwapPowGate, PhasedXPowGate,
    SwapPowGate, XPowGate, ZPowGate,
};
use qop_ir::{GateExt, GateRef, IrResult, Operation, QubitId};

/// Phase exponent used for the phased-X demo gate.
pub const PHASED_X_PHASE: f64 = 0.25;

/// Standard gates selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GateChoice {
    /// Toffoli
    Ccx,
    /// Doubly-controlled Z
    Ccz,
    /// SWAP
    Swap,
    /// ISWAP
    Iswap,
    /// Controlled NOT
    Cnot,
    /// Controlled Z
    Cz,
    /// Hadamard
    H,
    /// Pauli X
    X,
    /// Pauli Z
    Z,
    /// X rotation about a tilted axis
    PhasedX,
}

impl GateChoice {
    /// Build the gate raised to `exponent`.
    pub fn build(self, exponent: f64) -> GateRef {
        match self {
            GateChoice::Ccx => CCXPowGate::new(exponent).into_ref(),
            GateChoice::Ccz => CCZPowGate::new(exponent).into_ref(),
            GateChoice::Swap => SwapPowGate::new(exponent).into_ref(),
            GateChoice::Iswap => ISwapPowGate::new(exponent).into_ref(),
            GateChoice::Cnot => CNotPowGate::new(exponent).into_ref(),
            GateChoice::Cz => CZPowGate::new(exponent).into_ref(),
            GateChoice::H => HPowGate::new(exponent).into_ref(),
            GateChoice::X => XPowGate::new(exponent).into_ref(),
            GateChoice::Z => ZPowGate::new(exponent).into_ref(),
            GateChoice::PhasedX => PhasedXPowGate::new(PHASED_X_PHASE, exponent).into_ref(),
        }
    }

    /// Bind the gate to the first line qubits.
    pub fn operation(self, exponent: f64) -> IrResult<Operation> {
        let gate = self.build(exponent);
        let qubits = QubitId::line_range(gate.num_qubits() as i32);
        qop_ir::apply(gate, qubits)
    }
}

/// The demo primitive set: single-qubit gates and CZ powers.
pub fn is_primitive(op: &Operation) -> bool {
    op.num_qubits() == 1 || op.gate_as::<CZPowGate>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_choice_binds() {
        for choice in GateChoice::value_variants() {
            let op = choice.operation(0.5).unwrap();
            assert_eq!(op.num_qubits(), op.gate().num_qubits());
        }
    }

    #[test]
    fn test_primitive_set() {
        assert!(is_primitive(&GateChoice::Cz.operation(1.0).unwrap()));
        assert!(is_primitive(&GateChoice::H.operation(1.0).unwrap()));
        assert!(!is_primitive(&GateChoice::Cnot.operation(1.0).unwrap()));
    }
}
