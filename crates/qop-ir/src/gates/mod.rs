//! Built-in gate families.
//!
//! | Family | Qubits | Capabilities |
//! |--------|--------|--------------|
//! | `X`, `Y`, `Z` (and `Rx`, `Ry`, `Rz`) | 1 | unitary, pow, diagram |
//! | `H` | 1 | unitary, pow, diagram; decomposable at exponent 1 |
//! | `CZ` | 2 | unitary, pow, diagram |
//! | `CNOT`, `SWAP`, `ISWAP` | 2 | unitary, decomposable, pow, diagram |
//! | `CCZ`, `CCX` | 3 | unitary, decomposable, pow, diagram |
//! | `PhX` | 1 | unitary, decomposable, pow, diagram |
//! | `I` | n | unitary, decomposable (to nothing), pow, diagram |
//! | matrix | n | unitary, diagram |
//! | `M` | n | diagram |

pub mod controlled;
pub mod eigen;
pub mod hadamard;
pub mod identity;
pub mod matrix_gate;
pub mod measurement;
pub mod pauli;
pub mod phased;
pub mod swap;
pub mod three_qubit;

use num_complex::Complex64;

use crate::matrix::{Matrix, diagonal};

pub use controlled::{CNotPowGate, CZPowGate};
pub use eigen::{EigenComponent, EigenFamily, PowGate};
pub use hadamard::HPowGate;
pub use identity::IdentityGate;
pub use matrix_gate::MatrixGate;
pub use measurement::MeasurementGate;
pub use pauli::{XPowGate, YPowGate, ZPowGate};
pub use phased::PhasedXPowGate;
pub use swap::{ISwapPowGate, SwapPowGate};
pub use three_qubit::{CCXPowGate, CCZPowGate};

/// A normalized state vector from real amplitudes.
pub(crate) fn ket(amplitudes: &[f64]) -> Vec<Complex64> {
    let norm = amplitudes.iter().map(|a| a * a).sum::<f64>().sqrt();
    amplitudes
        .iter()
        .map(|&a| Complex64::new(a / norm, 0.0))
        .collect()
}

/// Projector onto a span of computational basis states.
pub(crate) fn basis_projector(dim: usize, indices: &[usize]) -> Matrix {
    let mut entries = vec![Complex64::new(0.0, 0.0); dim];
    for &i in indices {
        entries[i] = Complex64::new(1.0, 0.0);
    }
    diagonal(&entries)
}
