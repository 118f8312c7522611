//! Quantum Operation Model
//!
//! This crate defines the value types shared by the capability protocols in
//! `qop-protocols`: qubit identifiers, gates, operations, and the optional
//! capabilities a gate may expose.
//!
//! # Overview
//!
//! A [`Gate`] is an immutable description of an effect on a fixed number of
//! qubits. An [`Operation`] binds a gate to an ordered, duplicate-free list of
//! [`QubitId`]s. Each gate opts into zero or more [`Capability`] tags by
//! exposing the matching facet trait:
//!
//! - **Unitary**: [`UnitaryGate`] yields the gate's matrix.
//! - **Decomposable**: [`DecomposableGate`] rewrites the gate into simpler operations.
//! - **Extrapolatable**: [`ExtrapolatableGate`] raises the gate to a real power.
//! - **Diagram info**: [`DiagrammableGate`] describes how to draw the gate.
//!
//! # Example: Binding a Gate
//!
//! ```rust
//! use qop_ir::gates::CNotPowGate;
//! use qop_ir::{GateExt, QubitId};
//!
//! let op = CNotPowGate::cnot()
//!     .on([QubitId::line(0), QubitId::line(1)])
//!     .unwrap();
//! assert_eq!(op.to_string(), "CNOT(q(0), q(1))");
//!
//! // Arity and duplicate qubits are checked eagerly.
//! assert!(CNotPowGate::cnot().on([QubitId::line(0)]).is_err());
//! ```
//!
//! # Example: Canonical Exponents
//!
//! ```rust
//! use qop_ir::gates::XPowGate;
//!
//! // Exponents are folded into (-1, 1] for the X family.
//! assert_eq!(XPowGate::new(3.0), XPowGate::x());
//! assert_eq!(XPowGate::new(1.5).exponent(), -0.5);
//! ```

pub mod capability;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod gates;
pub mod matrix;
pub mod operation;
pub mod qubit;

pub use capability::{Capability, CapabilitySet, Capable, Describe, Extrapolatable};
pub use diagram::{DiagramArgs, DiagramInfo, WireSymbols};
pub use error::{IrError, IrResult};
pub use gate::{
    DecomposableGate, DiagrammableGate, ExtrapolatableGate, Gate, GateExt, GateRef, UnitaryGate,
    apply,
};
pub use matrix::Matrix;
pub use operation::Operation;
pub use qubit::QubitId;
