//! Dense complex matrices used as unitary representations.
//!
//! Row/column index `i` of an `n`-qubit matrix is the big-endian binary
//! encoding of the qubit states: the first qubit of an operation is the most
//! significant bit.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{IrError, IrResult};

/// A dense complex matrix.
pub type Matrix = Array2<Complex64>;

/// Tolerance for floating point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Build a square matrix from row-major entries.
pub fn from_rows(dim: usize, entries: Vec<Complex64>) -> IrResult<Matrix> {
    Array2::from_shape_vec((dim, dim), entries)
        .map_err(|e| IrError::InvalidMatrix(format!("expected {dim}x{dim} entries: {e}")))
}

/// Build a square matrix from real row-major entries.
pub fn from_real_rows(dim: usize, entries: &[f64]) -> IrResult<Matrix> {
    from_rows(dim, entries.iter().map(|&x| Complex64::new(x, 0.0)).collect())
}

/// The `dim x dim` identity matrix.
pub fn identity(dim: usize) -> Matrix {
    Array2::eye(dim)
}

/// A diagonal matrix.
pub fn diagonal(entries: &[Complex64]) -> Matrix {
    let mut m = Array2::zeros((entries.len(), entries.len()));
    for (i, &value) in entries.iter().enumerate() {
        m[[i, i]] = value;
    }
    m
}

/// Projector `|v⟩⟨v|` onto a (normalized) state vector.
pub fn projector(v: &[Complex64]) -> Matrix {
    let n = v.len();
    Array2::from_shape_fn((n, n), |(i, j)| v[i] * v[j].conj())
}

/// Conjugate transpose.
pub fn dagger(m: &Matrix) -> Matrix {
    m.t().mapv(|c| c.conj())
}

/// Kronecker product `a ⊗ b`.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix {
    ndarray::linalg::kron(a, b)
}

/// Element-wise comparison within `atol`.
pub fn allclose(a: &Matrix, b: &Matrix, atol: f64) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= atol)
}

/// Comparison that ignores a global phase factor.
pub fn allclose_up_to_global_phase(a: &Matrix, b: &Matrix, atol: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    // Align phases on the largest entry of `b`.
    let Some((idx, pivot)) = b
        .indexed_iter()
        .max_by(|(_, x), (_, y)| x.norm().total_cmp(&y.norm()))
    else {
        return true;
    };
    if pivot.norm() <= atol {
        return allclose(a, b, atol);
    }
    let phase = a[idx] / pivot;
    if (phase.norm() - 1.0).abs() > atol.max(EPSILON) * 10.0 {
        return false;
    }
    allclose(a, &b.mapv(|x| x * phase), atol)
}

/// Check `m · m† = I` within `atol`.
pub fn is_unitary(m: &Matrix, atol: f64) -> bool {
    let (rows, cols) = m.dim();
    rows == cols && allclose(&m.dot(&dagger(m)), &identity(rows), atol)
}

/// Number of qubits a `2^n x 2^n` matrix acts on.
pub fn num_qubits_of(m: &Matrix) -> Option<usize> {
    let (rows, cols) = m.dim();
    (rows == cols && rows.is_power_of_two()).then(|| rows.trailing_zeros() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kron_ordering() {
        // |1⟩ on the first qubit is the most significant bit.
        let x = from_real_rows(2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
        let i = identity(2);
        let xi = kron(&x, &i);
        assert_eq!(xi[[2, 0]], Complex64::new(1.0, 0.0));
        assert_eq!(xi[[1, 0]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_global_phase_comparison() {
        let z = diagonal(&[Complex64::new(1.0, 0.0), Complex64::new(-1.0, 0.0)]);
        let iz = z.mapv(|c| c * Complex64::new(0.0, 1.0));
        assert!(!allclose(&z, &iz, EPSILON));
        assert!(allclose_up_to_global_phase(&z, &iz, EPSILON));
    }

    #[test]
    fn test_unitarity_and_size() {
        let h = from_real_rows(2, &[1.0, 1.0, 1.0, -1.0])
            .unwrap()
            .mapv(|c| c * std::f64::consts::FRAC_1_SQRT_2);
        assert!(is_unitary(&h, EPSILON));
        assert_eq!(num_qubits_of(&h), Some(1));
        assert_eq!(num_qubits_of(&identity(8)), Some(3));
        assert_eq!(num_qubits_of(&identity(3)), None);
        assert!(!is_unitary(&h.mapv(|c| c * 2.0), EPSILON));
    }

    #[test]
    fn test_from_rows_rejects_wrong_length() {
        assert!(matches!(
            from_real_rows(2, &[1.0, 0.0, 0.0]),
            Err(IrError::InvalidMatrix(_))
        ));
    }
}
