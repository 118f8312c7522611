//! Operations: gates bound to qubits.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateRef};
use crate::qubit::QubitId;

/// A gate bound to an ordered, duplicate-free sequence of qubits.
///
/// The qubit count always equals the gate's arity; both invariants are
/// checked at construction. Operations compare and hash by
/// `(gate, qubits)`.
#[derive(Debug, Clone, Eq, Hash)]
pub struct Operation {
    gate: GateRef,
    qubits: Vec<QubitId>,
}

impl Operation {
    /// Bind `gate` to `qubits`.
    pub fn new(gate: GateRef, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        validate_qubits(gate.as_ref(), &qubits)?;
        Ok(Self { gate, qubits })
    }

    /// The bound gate.
    #[inline]
    pub fn gate(&self) -> &GateRef {
        &self.gate
    }

    /// The bound qubits, in order.
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Downcast the gate to a concrete type.
    pub fn gate_as<T: Gate>(&self) -> Option<&T> {
        self.gate.downcast_ref::<T>()
    }

    /// The same qubits with a different gate.
    pub fn with_gate(&self, gate: GateRef) -> IrResult<Self> {
        Self::new(gate, self.qubits.iter().cloned())
    }

    /// The same gate on different qubits.
    pub fn with_qubits(&self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        Self::new(self.gate.clone(), qubits)
    }

    /// Map every qubit through `f`.
    ///
    /// Fails with [`IrError::DuplicateQubit`] if `f` merges two qubits.
    pub fn transform_qubits(&self, f: impl FnMut(&QubitId) -> QubitId) -> IrResult<Self> {
        let qubits: Vec<QubitId> = self.qubits.iter().map(f).collect();
        self.with_qubits(qubits)
    }

    /// Split into gate and qubits.
    pub fn into_parts(self) -> (GateRef, Vec<QubitId>) {
        (self.gate, self.qubits)
    }
}

/// Check a qubit sequence against a gate's arity and for duplicates.
pub fn validate_qubits(gate: &dyn Gate, qubits: &[QubitId]) -> IrResult<()> {
    let expected = gate.num_qubits();
    if qubits.len() != expected {
        return Err(IrError::ArityMismatch {
            gate_name: gate.to_string(),
            expected,
            got: qubits.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for qubit in qubits {
        if !seen.insert(qubit) {
            return Err(IrError::DuplicateQubit {
                qubit: qubit.clone(),
                gate_name: gate.to_string(),
            });
        }
    }
    Ok(())
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        *self.gate == *other.gate && self.qubits == other.qubits
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate)?;
        for (i, qubit) in self.qubits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{qubit}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateExt;
    use crate::gates::{CNotPowGate, XPowGate};

    #[test]
    fn test_operation_round_trip() {
        let q = QubitId::line_range(2);
        let op = CNotPowGate::cnot().on(q.clone()).unwrap();
        assert_eq!(op.qubits(), q.as_slice());
        assert_eq!(op.gate_as::<CNotPowGate>(), Some(&CNotPowGate::cnot()));
        assert_eq!(op.num_qubits(), 2);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = XPowGate::x().on(QubitId::line_range(2)).unwrap_err();
        assert_eq!(
            err,
            IrError::ArityMismatch {
                gate_name: "X".into(),
                expected: 1,
                got: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_qubit() {
        let a = QubitId::named("a");
        let err = CNotPowGate::cnot().on([a.clone(), a.clone()]).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { qubit, .. } if qubit == a));
    }

    #[test]
    fn test_canonical_text() {
        let op = CNotPowGate::cnot()
            .on([QubitId::line(0), QubitId::named("b")])
            .unwrap();
        assert_eq!(op.to_string(), "CNOT(q(0), b)");

        let half = XPowGate::new(0.5).on([QubitId::grid(1, 2)]).unwrap();
        assert_eq!(half.to_string(), "X**0.5(q(1, 2))");
    }

    #[test]
    fn test_transform_qubits_rejects_merge() {
        let op = CNotPowGate::cnot().on(QubitId::line_range(2)).unwrap();
        let shifted = op.transform_qubits(|q| match q {
            QubitId::Line(x) => QubitId::line(x + 10),
            other => other.clone(),
        });
        assert_eq!(
            shifted.unwrap().qubits(),
            &[QubitId::line(10), QubitId::line(11)]
        );
        assert!(op.transform_qubits(|_| QubitId::line(0)).is_err());
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        let a = XPowGate::new(0.5).on([QubitId::line(0)]).unwrap();
        let b = XPowGate::new(0.5).on([QubitId::line(0)]).unwrap();
        let c = XPowGate::new(0.5).on([QubitId::line(1)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<Operation> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
