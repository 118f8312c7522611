//! Integration tests for the demo suite.
//!
//! These tests run the same pipelines as the demo binaries on every gate in
//! the catalog.

use clap::ValueEnum;
use qop_demos::catalog::{GateChoice, is_primitive};
use qop_demos::describe_operation;
use qop_ir::DiagramArgs;
use qop_protocols::{Decomposer, ProtocolConfig, inverse, power};

/// Every catalog gate flattens to primitives, and flattening is idempotent.
#[test]
fn test_catalog_decomposes_to_primitives() {
    let config = ProtocolConfig::default();
    let decomposer = Decomposer::from_config(&config.decompose).keep(is_primitive);

    for choice in GateChoice::value_variants() {
        for exponent in [1.0, 0.5, -0.25] {
            let op = choice.operation(exponent).unwrap();
            let flat = decomposer.run(&op).unwrap();
            assert!(
                flat.iter().all(is_primitive),
                "{op} left non-primitive operations"
            );
            assert_eq!(decomposer.run_all(&flat).unwrap(), flat);
        }
    }
}

/// Toffoli flattens through the eight-CNOT CCZ rule.
#[test]
fn test_toffoli_cz_count() {
    let op = GateChoice::Ccx.operation(1.0).unwrap();
    let flat = Decomposer::new().keep(is_primitive).run(&op).unwrap();
    let two_qubit = flat.iter().filter(|op| op.num_qubits() == 2).count();
    assert_eq!(two_qubit, 8);
}

/// Every primitive can be described with a diagram label.
#[test]
fn test_describe_primitives() {
    let args = DiagramArgs::default();
    let op = GateChoice::Cnot.operation(0.5).unwrap();
    let flat = Decomposer::new().keep(is_primitive).run(&op).unwrap();
    for primitive in &flat {
        let line = describe_operation(primitive, &args).unwrap();
        assert!(line.starts_with(&primitive.to_string()));
        assert!(line.contains('['));
    }
}

#[test]
fn test_describe_cnot() {
    let op = GateChoice::Cnot.operation(0.5).unwrap();
    let line = describe_operation(&op, &DiagramArgs::default()).unwrap();
    assert_eq!(line, "CNOT**0.5(q(0), q(1))  [@, X^0.5]");
}

/// Powers of catalog gates invert cleanly.
#[test]
fn test_catalog_inverse() {
    for choice in GateChoice::value_variants() {
        let gate = choice.build(0.5);
        let inv = inverse(gate.as_ref()).unwrap();
        assert_eq!(inv.num_qubits(), gate.num_qubits());
        assert_eq!(&power(inv.as_ref(), -1.0).unwrap(), &gate);
    }
}
