//! Gates defined directly by a unitary matrix.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::error::{IrError, IrResult};
use crate::gate::{DiagrammableGate, Gate, UnitaryGate, hash_f64};
use crate::matrix::{Matrix, is_unitary, num_qubits_of};

/// Tolerance used when validating user-supplied matrices.
const UNITARY_TOLERANCE: f64 = 1e-8;

/// An opaque unitary.
///
/// Supports matrix extraction and diagram labels only; it has no
/// exponentiation rule and no decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGate {
    matrix: Matrix,
    num_qubits: usize,
    name: Option<String>,
}

impl MatrixGate {
    /// Wrap a `2^n x 2^n` unitary matrix.
    pub fn new(matrix: Matrix) -> IrResult<Self> {
        let num_qubits = num_qubits_of(&matrix).ok_or_else(|| {
            let (rows, cols) = matrix.dim();
            IrError::InvalidMatrix(format!(
                "expected a square power-of-two matrix, got {rows}x{cols}"
            ))
        })?;
        if !is_unitary(&matrix, UNITARY_TOLERANCE) {
            return Err(IrError::InvalidMatrix("matrix is not unitary".into()));
        }
        Ok(Self {
            matrix,
            num_qubits,
            name: None,
        })
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The wrapped matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("U")
    }
}

impl Eq for MatrixGate {}

impl Hash for MatrixGate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num_qubits.hash(state);
        self.name.hash(state);
        for entry in &self.matrix {
            hash_f64(entry.re, state);
            hash_f64(entry.im, state);
        }
    }
}

impl fmt::Display for MatrixGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Gate for MatrixGate {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn as_unitary(&self) -> Option<&dyn UnitaryGate> {
        Some(self)
    }

    fn as_diagrammable(&self) -> Option<&dyn DiagrammableGate> {
        Some(self)
    }
}

impl UnitaryGate for MatrixGate {
    fn unitary(&self) -> Matrix {
        self.matrix.clone()
    }
}

impl DiagrammableGate for MatrixGate {
    fn diagram_info(&self, _args: &DiagramArgs) -> DiagramInfo {
        let label = self.label().to_string();
        DiagramInfo::per_qubit(
            std::iter::once(label).chain((2..=self.num_qubits).map(|i| format!("#{i}"))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::matrix::{from_real_rows, identity};

    #[test]
    fn test_rejects_non_unitary() {
        let m = from_real_rows(2, &[1.0, 1.0, 0.0, 1.0]).unwrap();
        assert!(matches!(MatrixGate::new(m), Err(IrError::InvalidMatrix(_))));

        let m = Matrix::zeros((2, 3));
        assert!(MatrixGate::new(m).is_err());
    }

    #[test]
    fn test_capabilities() {
        let gate = MatrixGate::new(identity(4)).unwrap().with_name("Q");
        let caps = gate.capabilities();
        assert!(caps.contains(Capability::Unitary));
        assert!(caps.contains(Capability::DiagramInfo));
        assert!(!caps.contains(Capability::Extrapolatable));
        assert!(!caps.contains(Capability::Decomposable));
        assert_eq!(gate.num_qubits(), 2);
    }

    #[test]
    fn test_diagram_labels() {
        let gate = MatrixGate::new(identity(8)).unwrap();
        let info = gate.diagram_info(&DiagramArgs::default());
        assert_eq!(info.symbols_for(3), vec!["U", "#2", "#3"]);
    }
}
