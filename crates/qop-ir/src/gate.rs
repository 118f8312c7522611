//! The gate model and its capability facets.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::capability::{Capability, CapabilitySet};
use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::error::IrResult;
use crate::matrix::Matrix;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Shared handle to an immutable gate.
pub type GateRef = Arc<dyn Gate>;

/// A stateless description of an effect on a fixed number of qubits.
///
/// Each capability is an optional facet: a gate that supports it returns
/// `Some(self)` from the matching `as_*` accessor. Support may depend on the
/// gate's parameters, so the accessors are evaluated per instance.
///
/// `Display` is the gate's canonical name, e.g. `X`, `X**0.5`, `CNOT`.
pub trait Gate: DynGate + fmt::Debug + fmt::Display + Send + Sync {
    /// Number of qubits this gate acts on.
    fn num_qubits(&self) -> usize;

    /// Unitary facet.
    fn as_unitary(&self) -> Option<&dyn UnitaryGate> {
        None
    }

    /// Decomposition facet.
    fn as_decomposable(&self) -> Option<&dyn DecomposableGate> {
        None
    }

    /// Exponentiation facet.
    fn as_extrapolatable(&self) -> Option<&dyn ExtrapolatableGate> {
        None
    }

    /// Diagram facet.
    fn as_diagrammable(&self) -> Option<&dyn DiagrammableGate> {
        None
    }

    /// The capabilities this instance supports.
    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::empty()
            .with_if(Capability::Unitary, self.as_unitary().is_some())
            .with_if(Capability::Decomposable, self.as_decomposable().is_some())
            .with_if(Capability::Extrapolatable, self.as_extrapolatable().is_some())
            .with_if(Capability::DiagramInfo, self.as_diagrammable().is_some())
    }
}

/// Matrix extraction.
pub trait UnitaryGate {
    /// The gate's matrix in its own qubit order.
    fn unitary(&self) -> Matrix;
}

/// One-level rewriting into simpler operations.
pub trait DecomposableGate {
    /// Decompose the gate as applied to `qubits`.
    ///
    /// `qubits` has already been checked against the gate's arity.
    fn decompose(&self, qubits: &[QubitId]) -> IrResult<Vec<Operation>>;
}

/// Continuous exponentiation.
pub trait ExtrapolatableGate {
    /// Raise the gate to `exponent`, canonicalizing the result.
    fn pow(&self, exponent: f64) -> IrResult<GateRef>;
}

/// Diagram labeling.
pub trait DiagrammableGate {
    /// A compact label for drawing the gate.
    fn diagram_info(&self, args: &DiagramArgs) -> DiagramInfo;
}

/// Object-safe equality, hashing and downcasting for gates.
///
/// Implemented automatically for every gate type that is `PartialEq + Hash`.
pub trait DynGate: Any {
    /// Upcast for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Value equality against another gate of any type.
    fn dyn_eq(&self, other: &dyn Gate) -> bool;

    /// Hash including the concrete type.
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T: Gate + PartialEq + Hash> DynGate for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Gate) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

impl PartialEq for dyn Gate {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Eq for dyn Gate {}

impl Hash for dyn Gate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dyn_hash(state);
    }
}

impl dyn Gate {
    /// Downcast to a concrete gate type.
    pub fn downcast_ref<T: Gate>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Convenience methods for concrete gates.
pub trait GateExt: Gate + Sized + 'static {
    /// Bind this gate to `qubits`.
    ///
    /// Fails with [`crate::IrError::ArityMismatch`] or
    /// [`crate::IrError::DuplicateQubit`].
    fn on(self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Operation> {
        Operation::new(Arc::new(self), qubits)
    }

    /// Move the gate behind a shared handle.
    fn into_ref(self) -> GateRef {
        Arc::new(self)
    }
}

impl<T: Gate + Sized + 'static> GateExt for T {}

/// Bind a shared gate to `qubits`.
pub fn apply(gate: GateRef, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Operation> {
    Operation::new(gate, qubits)
}

/// Hash an `f64` parameter so that `0.0` and `-0.0` collide.
pub(crate) fn hash_f64<H: Hasher + ?Sized>(value: f64, state: &mut H) {
    let normalized = if value == 0.0 { 0.0_f64 } else { value };
    state.write_u64(normalized.to_bits());
}
