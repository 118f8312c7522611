//! Capability Protocols for Quantum Operations
//!
//! This crate implements the algorithms that consume the optional gate
//! capabilities defined in `qop-ir`:
//!
//! - **Unitary resolver**: [`unitary`], [`try_unitary`], [`unitary_or`], [`has_unitary`]
//! - **Exponent/inverse algebra**: [`power`], [`inverse`] and their fallible
//!   and defaulting variants, including inversion of operation sequences
//! - **Decomposition engine**: [`decompose_once`] and the recursive
//!   [`decompose`] / [`Decomposer`] with keep predicates, interception and a
//!   depth limit
//! - **Diagram info resolver**: [`diagram_info`] and variants
//!
//! Every query is tri-state: a result, "unsupported" (`None`, a supplied
//! default, or [`ProtocolError::CapabilityUnsupported`]), or a typed error for
//! malformed input.
//!
//! # Example: Decomposing a Toffoli
//!
//! ```rust
//! use qop_ir::gates::{CCXPowGate, CZPowGate};
//! use qop_ir::{GateExt, Operation, QubitId};
//! use qop_protocols::Decomposer;
//!
//! let op = CCXPowGate::ccx().on(QubitId::line_range(3)).unwrap();
//!
//! let is_primitive =
//!     |op: &Operation| op.num_qubits() == 1 || op.gate_as::<CZPowGate>().is_some();
//! let ops = Decomposer::new().keep(is_primitive).run(&op).unwrap();
//!
//! assert!(ops.iter().all(|op| is_primitive(op)));
//! ```
//!
//! # Example: Inverting a Sequence
//!
//! ```rust
//! use qop_ir::gates::{CNotPowGate, ZPowGate};
//! use qop_ir::{GateExt, QubitId};
//! use qop_protocols::inverse;
//!
//! let (a, b) = (QubitId::named("a"), QubitId::named("b"));
//! let ops = vec![
//!     ZPowGate::s().on([b.clone()]).unwrap(),
//!     CNotPowGate::cnot().on([a.clone(), b.clone()]).unwrap(),
//! ];
//!
//! let inv = inverse(ops.as_slice()).unwrap();
//! assert_eq!(inv[0].to_string(), "CNOT(a, b)");
//! assert_eq!(inv[1].to_string(), "S**-1(b)");
//! ```

pub mod config;
pub mod decompose;
pub mod diagram;
pub mod error;
pub mod pow;
pub mod unitary;

pub use config::{ConfigError, DecomposeConfig, ProtocolConfig};
pub use decompose::{
    DEFAULT_MAX_DEPTH, Decomposer, InterceptFn, KeepFn, decompose, decompose_once, decompose_once_or,
    decompose_once_with_qubits, try_decompose_once,
};
pub use diagram::{diagram_info, diagram_info_or, try_diagram_info};
pub use error::{ProtocolError, ProtocolResult, StuckReason};
pub use pow::{inverse, inverse_or, is_invertible, power, power_or, try_inverse, try_power};
pub use unitary::{has_unitary, try_unitary, unitary, unitary_or};
