//! Property-based tests for the protocol algorithms.
//!
//! Covers operation construction, sequence inversion and decomposition on
//! randomly generated gates drawn from the built-in families.

mod common;

use common::{circuit_unitary, is_primitive};
use proptest::prelude::*;
use qop_ir::gates::{
    CCXPowGate, CCZPowGate, CNotPowGate, CZPowGate, HPowGate, ISwapPowGate, PhasedXPowGate,
    SwapPowGate, XPowGate, YPowGate, ZPowGate,
};
use qop_ir::matrix::{allclose, identity};
use qop_ir::{GateExt, GateRef, IrError, Operation, QubitId};
use qop_protocols::{Decomposer, inverse, power, unitary};

const REGISTER_SIZE: i32 = 4;

/// Generate a gate from one of the built-in extrapolatable families.
fn arb_gate() -> impl Strategy<Value = GateRef> {
    let exponent = -0.99_f64..0.99;
    prop_oneof![
        exponent.clone().prop_map(|e| XPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| YPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| ZPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| XPowGate::rx(e).into_ref()),
        Just(HPowGate::h().into_ref()),
        exponent.clone().prop_map(|e| CZPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| CNotPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| SwapPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| ISwapPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| CCZPowGate::new(e).into_ref()),
        exponent.clone().prop_map(|e| CCXPowGate::new(e).into_ref()),
        (exponent.clone(), exponent).prop_map(|(p, e)| PhasedXPowGate::new(p, e).into_ref()),
    ]
}

/// Generate an operation on distinct qubits of a small line register.
fn arb_operation() -> impl Strategy<Value = Operation> {
    (arb_gate(), Just(QubitId::line_range(REGISTER_SIZE)).prop_shuffle()).prop_map(
        |(gate, register)| {
            let arity = gate.num_qubits();
            qop_ir::apply(gate, register.into_iter().take(arity)).unwrap()
        },
    )
}

fn arb_sequence() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(arb_operation(), 0..=8)
}

proptest! {
    #[test]
    fn binding_round_trips(gate in arb_gate(), register in Just(QubitId::line_range(REGISTER_SIZE)).prop_shuffle()) {
        let qubits: Vec<QubitId> = register.into_iter().take(gate.num_qubits()).collect();
        let op = qop_ir::apply(gate.clone(), qubits.clone()).unwrap();
        prop_assert_eq!(op.qubits(), qubits.as_slice());
        prop_assert_eq!(op.gate(), &gate);
    }

    #[test]
    fn wrong_arity_is_rejected(gate in arb_gate()) {
        let qubits = QubitId::line_range(gate.num_qubits() as i32 + 1);
        let is_arity_mismatch = matches!(
            qop_ir::apply(gate, qubits),
            Err(IrError::ArityMismatch { .. })
        );
        prop_assert!(is_arity_mismatch);
    }

    #[test]
    fn repeated_qubit_is_rejected(gate in arb_gate().prop_filter("multi-qubit", |g| g.num_qubits() > 1)) {
        let mut qubits = QubitId::line_range(gate.num_qubits() as i32);
        qubits[1] = qubits[0].clone();
        let is_duplicate = matches!(
            qop_ir::apply(gate, qubits),
            Err(IrError::DuplicateQubit { .. })
        );
        prop_assert!(is_duplicate);
    }

    #[test]
    fn sequence_inverse_is_an_involution(ops in arb_sequence()) {
        let inv = inverse(ops.as_slice()).unwrap();
        prop_assert_eq!(inv.len(), ops.len());
        let back = inverse(inv.as_slice()).unwrap();
        prop_assert_eq!(back, ops);
    }

    #[test]
    fn sequence_inverse_undoes_the_sequence(ops in arb_sequence()) {
        let register = QubitId::line_range(REGISTER_SIZE);
        let inv = inverse(ops.as_slice()).unwrap();
        let round_trip: Vec<Operation> = ops.iter().chain(inv.iter()).cloned().collect();
        let m = circuit_unitary(&round_trip, &register);
        prop_assert!(allclose(&m, &identity(1 << REGISTER_SIZE), 1e-8));
    }

    #[test]
    fn gate_inverse_multiplies_to_identity(gate in arb_gate()) {
        let inv = power(gate.as_ref(), -1.0).unwrap();
        let product = unitary(inv.as_ref()).unwrap().dot(&unitary(gate.as_ref()).unwrap());
        prop_assert!(allclose(&product, &identity(1 << gate.num_qubits()), 1e-9));
    }

    #[test]
    fn decomposition_is_finite_kept_and_idempotent(ops in arb_sequence()) {
        let decomposer = Decomposer::new().keep(is_primitive);
        let once = decomposer.run_all(&ops).unwrap();
        prop_assert!(once.iter().all(is_primitive));
        let twice = decomposer.run_all(&once).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn decomposition_preserves_unitary(ops in arb_sequence()) {
        let register = QubitId::line_range(REGISTER_SIZE);
        let flattened = Decomposer::new().keep(is_primitive).run_all(&ops).unwrap();
        let expected = circuit_unitary(&ops, &register);
        let actual = circuit_unitary(&flattened, &register);
        prop_assert!(allclose(&actual, &expected, 1e-8));
    }
}
