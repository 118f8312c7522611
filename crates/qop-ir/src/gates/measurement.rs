//! Computational-basis measurement.

use std::fmt;

use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::gate::{DiagrammableGate, Gate};

/// Measures `n` qubits under a result key.
///
/// Non-unitary and not invertible; it can only be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementGate {
    key: String,
    num_qubits: usize,
}

impl MeasurementGate {
    /// Measure `num_qubits` qubits into `key`.
    pub fn new(key: impl Into<String>, num_qubits: usize) -> Self {
        Self {
            key: key.into(),
            num_qubits,
        }
    }

    /// The result key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for MeasurementGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M[{}]", self.key)
    }
}

impl Gate for MeasurementGate {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn as_diagrammable(&self) -> Option<&dyn DiagrammableGate> {
        Some(self)
    }
}

impl DiagrammableGate for MeasurementGate {
    fn diagram_info(&self, _args: &DiagramArgs) -> DiagramInfo {
        DiagramInfo::uniform("M")
    }
}
