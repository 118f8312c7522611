//! Exponent and inverse algebra.
//!
//! Powers are delegated to the value's exponentiation rule, which for eigen
//! families multiplies the exponent and then folds it back into the family's
//! canonical range. Because of that folding, composition is not associative:
//!
//! ```rust
//! use qop_ir::gates::XPowGate;
//! use qop_protocols::power;
//!
//! let x = XPowGate::x();
//! let cubed = power(&x, 3.0).unwrap();
//! let nested = power(cubed.as_ref(), 0.5).unwrap();
//! let direct = power(&x, 1.5).unwrap();
//! assert_eq!(nested.to_string(), "X**0.5");
//! assert_eq!(direct.to_string(), "X**-0.5");
//! ```
//!
//! Sequences of operations support exactly one exponent, `-1`.

use qop_ir::{Capability, Extrapolatable};
use tracing::debug;

use crate::error::{ProtocolError, ProtocolResult};

/// Raise `value` to `exponent`.
///
/// Fails with [`ProtocolError::CapabilityUnsupported`] when the value cannot
/// be exponentiated (or, for sequences, when `exponent != -1`), and with
/// [`qop_ir::IrError::InvalidExponent`] for non-finite exponents.
pub fn power<V: Extrapolatable + ?Sized>(value: &V, exponent: f64) -> ProtocolResult<V::Output> {
    try_power(value, exponent)?.ok_or_else(|| {
        debug!("No power {} for {}", exponent, value.describe());
        ProtocolError::CapabilityUnsupported {
            capability: Capability::Extrapolatable,
            value: value.describe(),
        }
    })
}

/// Raise `value` to `exponent`, or `Ok(None)` when unsupported.
pub fn try_power<V: Extrapolatable + ?Sized>(
    value: &V,
    exponent: f64,
) -> ProtocolResult<Option<V::Output>> {
    Ok(value.query_pow(exponent).transpose()?)
}

/// Raise `value` to `exponent`, or return `default` when unsupported.
///
/// Rejected exponents are still reported as errors.
pub fn power_or<V: Extrapolatable + ?Sized>(
    value: &V,
    exponent: f64,
    default: V::Output,
) -> ProtocolResult<V::Output> {
    Ok(try_power(value, exponent)?.unwrap_or(default))
}

/// The inverse of a value, i.e. its power `-1`.
///
/// For a sequence this is the reversed sequence of inverted elements. If any
/// element has no inverse the whole sequence is [`ProtocolError::NotInvertible`].
pub fn inverse<V: Extrapolatable + ?Sized>(value: &V) -> ProtocolResult<V::Output> {
    try_inverse(value)?.ok_or_else(|| {
        debug!("No inverse for {}", value.describe());
        ProtocolError::NotInvertible {
            value: value.describe(),
        }
    })
}

/// The inverse, or `Ok(None)` when the value is not invertible.
pub fn try_inverse<V: Extrapolatable + ?Sized>(value: &V) -> ProtocolResult<Option<V::Output>> {
    try_power(value, -1.0)
}

/// The inverse, or `default` when the value is not invertible.
pub fn inverse_or<V: Extrapolatable + ?Sized>(
    value: &V,
    default: V::Output,
) -> ProtocolResult<V::Output> {
    Ok(try_inverse(value)?.unwrap_or(default))
}

/// Whether [`inverse`] would succeed.
pub fn is_invertible<V: Extrapolatable + ?Sized>(value: &V) -> bool {
    matches!(value.query_pow(-1.0), Some(Ok(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qop_ir::gates::{CNotPowGate, MatrixGate, MeasurementGate, XPowGate, ZPowGate};
    use qop_ir::matrix::identity;
    use qop_ir::{GateExt, IrError, Operation, QubitId};

    fn named(name: &str) -> QubitId {
        QubitId::named(name)
    }

    #[test]
    fn test_gate_power() {
        let half = power(&XPowGate::x(), 0.5).unwrap();
        assert_eq!(half.downcast_ref::<XPowGate>(), Some(&XPowGate::new(0.5)));
    }

    #[test]
    fn test_non_finite_exponent() {
        let err = power(&XPowGate::x(), f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Ir(IrError::InvalidExponent { .. })
        ));
    }

    #[test]
    fn test_unsupported_power() {
        let gate = MatrixGate::new(identity(2)).unwrap();
        assert!(try_power(&gate, 2.0).unwrap().is_none());
        assert!(matches!(
            power(&gate, 2.0),
            Err(ProtocolError::CapabilityUnsupported {
                capability: Capability::Extrapolatable,
                ..
            })
        ));
        let fallback = power_or(&gate, 2.0, XPowGate::x().into_ref()).unwrap();
        assert_eq!(fallback.to_string(), "X");
    }

    #[test]
    fn test_sequence_inverse() {
        let (a, b) = (named("a"), named("b"));
        let ops = vec![
            ZPowGate::s().on([b.clone()]).unwrap(),
            CNotPowGate::cnot().on([a.clone(), b.clone()]).unwrap(),
        ];
        let inv = inverse(ops.as_slice()).unwrap();
        let expected = vec![
            CNotPowGate::cnot().on([a, b.clone()]).unwrap(),
            power(&ops[0], -1.0).unwrap(),
        ];
        assert_eq!(inv, expected);
        assert_eq!(inv[1].to_string(), "S**-1(b)");

        let back = inverse(inv.as_slice()).unwrap();
        assert_eq!(back, ops);
    }

    #[test]
    fn test_sequence_inverse_all_or_nothing() {
        let ops = vec![
            XPowGate::x().on([named("a")]).unwrap(),
            MeasurementGate::new("m", 1).on([named("a")]).unwrap(),
        ];
        assert!(!is_invertible(ops.as_slice()));
        assert_eq!(
            inverse(ops.as_slice()).unwrap_err(),
            ProtocolError::NotInvertible {
                value: "[X(a), M[m](a)]".into()
            }
        );
        let fallback: Vec<Operation> = Vec::new();
        assert!(inverse_or(ops.as_slice(), fallback).unwrap().is_empty());
    }

    #[test]
    fn test_sequence_rejects_other_exponents() {
        let ops = vec![XPowGate::x().on([named("a")]).unwrap()];
        assert!(try_power(ops.as_slice(), 0.5).unwrap().is_none());
        assert!(try_power(ops.as_slice(), -1.0).unwrap().is_some());
    }

    #[test]
    fn test_dyn_gate_inverse() {
        let gate = ZPowGate::t().into_ref();
        let inv = inverse(gate.as_ref()).unwrap();
        assert_eq!(inv.to_string(), "T**-1");
        assert!(is_invertible(gate.as_ref()));
        assert_eq!(inv.num_qubits(), 1);
    }
}
