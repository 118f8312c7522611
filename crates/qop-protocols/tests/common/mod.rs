//! Shared helpers for integration tests.

#![allow(dead_code)]

use ndarray::Array2;
use num_complex::Complex64;
use qop_ir::gates::CZPowGate;
use qop_ir::matrix::Matrix;
use qop_ir::{Operation, QubitId};
use qop_protocols::unitary;

/// Primitive set used throughout the tests: single-qubit gates and CZ powers.
pub fn is_primitive(op: &Operation) -> bool {
    op.num_qubits() == 1 || op.gate_as::<CZPowGate>().is_some()
}

/// Dense unitary of a sequence of operations over `qubits`.
///
/// Operations are applied in order; `qubits[0]` is the most significant bit.
pub fn circuit_unitary(ops: &[Operation], qubits: &[QubitId]) -> Matrix {
    let dim = 1usize << qubits.len();
    let mut total: Matrix = Array2::eye(dim);
    for op in ops {
        let targets: Vec<usize> = op
            .qubits()
            .iter()
            .map(|q| {
                qubits
                    .iter()
                    .position(|p| p == q)
                    .unwrap_or_else(|| panic!("qubit {q} not in register"))
            })
            .collect();
        let u = unitary(op).unwrap_or_else(|e| panic!("{op} has no unitary: {e}"));
        total = embed(&u, &targets, qubits.len()).dot(&total);
    }
    total
}

/// Lift a `k`-qubit matrix acting on `targets` into the `n`-qubit space.
fn embed(u: &Matrix, targets: &[usize], n: usize) -> Matrix {
    let dim = 1usize << n;
    let k = targets.len();
    let mut out: Matrix = Array2::zeros((dim, dim));
    let bit = |index: usize, qubit: usize| (index >> (n - 1 - qubit)) & 1;

    for col in 0..dim {
        let sub_col = targets
            .iter()
            .fold(0, |acc, &t| (acc << 1) | bit(col, t));
        for sub_row in 0..(1usize << k) {
            let amp: Complex64 = u[[sub_row, sub_col]];
            if amp.norm() == 0.0 {
                continue;
            }
            let mut row = col;
            for (i, &t) in targets.iter().enumerate() {
                let value = (sub_row >> (k - 1 - i)) & 1;
                let mask = 1 << (n - 1 - t);
                row = if value == 1 { row | mask } else { row & !mask };
            }
            out[[row, col]] += amp;
        }
    }
    out
}
