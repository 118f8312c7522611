//! Eigen-gates: gates defined by their eigen-decomposition.
//!
//! A gate with eigen-components `(λ, P_λ)`, exponent `t` and global shift `s`
//! has the matrix `Σ_λ exp(iπ·t·(λ + s)) · P_λ`. Raising such a gate to a
//! power multiplies its exponent, after which the exponent is mapped into the
//! family's canonical range `(-period/2, period/2]`. Canonicalization never
//! changes the matrix, but it does make exponent composition
//! non-associative: `(X**3)**0.5` is `X**0.5` while `X**1.5` is `X**-0.5`.

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use num_complex::Complex64;

use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::error::{IrError, IrResult};
use crate::gate::{
    DecomposableGate, DiagrammableGate, ExtrapolatableGate, Gate, GateRef, UnitaryGate, hash_f64,
};
use crate::matrix::Matrix;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Largest denominator tried when approximating periods as fractions.
const MAX_PERIOD_DENOMINATOR: u64 = 1000;

/// One eigen-space of a gate.
#[derive(Debug, Clone)]
pub struct EigenComponent {
    /// Eigenvalue in half-turns: the eigenvalue of the gate at exponent 1 is `exp(iπλ)`.
    pub half_turns: f64,
    /// Projector onto the eigen-space.
    pub projector: Matrix,
}

impl EigenComponent {
    /// Create a component.
    pub fn new(half_turns: f64, projector: Matrix) -> Self {
        Self {
            half_turns,
            projector,
        }
    }
}

/// Decomposition rule of an eigen family.
pub type Decomposition<F> = fn(&PowGate<F>, &[QubitId]) -> IrResult<Vec<Operation>>;

/// Static description of an eigen-gate family.
pub trait EigenFamily: Sized + fmt::Debug + Send + Sync + 'static {
    /// Canonical name at exponent 1.
    const NAME: &'static str;

    /// Number of qubits.
    const NUM_QUBITS: usize;

    /// Rewrite rule, if the family has one.
    const DECOMPOSITION: Option<Decomposition<Self>> = None;

    /// Eigen-decomposition at exponent 1 without global shift.
    fn eigen_components() -> Vec<EigenComponent>;

    /// Diagram symbols, one per qubit.
    fn wire_symbols(args: &DiagramArgs) -> Vec<String>;

    /// Whether [`Self::DECOMPOSITION`] is exact for `gate`. Only consulted
    /// when the family has a rule.
    fn decomposes(_gate: &PowGate<Self>) -> bool {
        true
    }

    /// Name used for rotation-style display when the global shift is `-1/2`.
    fn rotation_name() -> Option<&'static str> {
        None
    }

    /// Map a raw exponent into the family's canonical range.
    fn canonicalize(exponent: f64, global_shift: f64) -> f64 {
        canonicalize_exponent(exponent, period(&Self::eigen_components(), global_shift))
    }

    /// Canonical text of `gate`.
    fn fmt_gate(gate: &PowGate<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        default_fmt(Self::NAME, gate, f)
    }
}

/// An eigen-gate of family `F` raised to a canonical exponent.
pub struct PowGate<F: EigenFamily> {
    exponent: f64,
    global_shift: f64,
    family: PhantomData<F>,
}

impl<F: EigenFamily> PowGate<F> {
    /// Create a gate with no global shift.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is not finite. Use [`Self::try_new`] for
    /// untrusted input.
    pub fn new(exponent: f64) -> Self {
        Self::with_global_shift(exponent, 0.0)
    }

    /// Create a gate with a global phase shift (in half-turns).
    ///
    /// # Panics
    ///
    /// Panics if `exponent` or `global_shift` is not finite.
    pub fn with_global_shift(exponent: f64, global_shift: f64) -> Self {
        assert!(
            exponent.is_finite() && global_shift.is_finite(),
            "{} needs a finite exponent and global shift, got {} and {}",
            F::NAME,
            exponent,
            global_shift,
        );
        Self::canonical(exponent, global_shift)
    }

    /// Create a gate with no global shift, rejecting non-finite exponents.
    pub fn try_new(exponent: f64) -> IrResult<Self> {
        Self::try_with_global_shift(exponent, 0.0)
    }

    /// Create a gate with a global shift, rejecting non-finite parameters.
    pub fn try_with_global_shift(exponent: f64, global_shift: f64) -> IrResult<Self> {
        for value in [exponent, global_shift] {
            if !value.is_finite() {
                return Err(IrError::InvalidExponent {
                    gate_name: F::NAME.to_string(),
                    exponent: value,
                });
            }
        }
        Ok(Self::canonical(exponent, global_shift))
    }

    fn canonical(exponent: f64, global_shift: f64) -> Self {
        Self {
            exponent: F::canonicalize(exponent, global_shift),
            global_shift,
            family: PhantomData,
        }
    }

    /// The canonical exponent.
    #[inline]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// The global shift.
    #[inline]
    pub fn global_shift(&self) -> f64 {
        self.global_shift
    }

    /// The exponent period, if the family has one at this shift.
    pub fn period(&self) -> Option<f64> {
        period(&F::eigen_components(), self.global_shift)
    }

    /// Eigen-components of the family at exponent 1.
    pub fn eigen_components(&self) -> Vec<EigenComponent> {
        F::eigen_components()
    }
}

impl<F: EigenFamily> Clone for PowGate<F> {
    fn clone(&self) -> Self {
        Self {
            exponent: self.exponent,
            global_shift: self.global_shift,
            family: PhantomData,
        }
    }
}

impl<F: EigenFamily> fmt::Debug for PowGate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowGate")
            .field("family", &F::NAME)
            .field("exponent", &self.exponent)
            .field("global_shift", &self.global_shift)
            .finish()
    }
}

impl<F: EigenFamily> PartialEq for PowGate<F> {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent && self.global_shift == other.global_shift
    }
}

impl<F: EigenFamily> Hash for PowGate<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.exponent, state);
        hash_f64(self.global_shift, state);
    }
}

impl<F: EigenFamily> fmt::Display for PowGate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        F::fmt_gate(self, f)
    }
}

impl<F: EigenFamily> Gate for PowGate<F> {
    fn num_qubits(&self) -> usize {
        F::NUM_QUBITS
    }

    fn as_unitary(&self) -> Option<&dyn UnitaryGate> {
        Some(self)
    }

    fn as_decomposable(&self) -> Option<&dyn DecomposableGate> {
        let exact = F::DECOMPOSITION.is_some() && F::decomposes(self);
        exact.then_some(self as &dyn DecomposableGate)
    }

    fn as_extrapolatable(&self) -> Option<&dyn ExtrapolatableGate> {
        Some(self)
    }

    fn as_diagrammable(&self) -> Option<&dyn DiagrammableGate> {
        Some(self)
    }
}

impl<F: EigenFamily> UnitaryGate for PowGate<F> {
    fn unitary(&self) -> Matrix {
        eigen_unitary(&F::eigen_components(), self.exponent, self.global_shift)
    }
}

impl<F: EigenFamily> DecomposableGate for PowGate<F> {
    fn decompose(&self, qubits: &[QubitId]) -> IrResult<Vec<Operation>> {
        match F::DECOMPOSITION {
            Some(rule) if F::decomposes(self) => rule(self, qubits),
            _ => Err(IrError::NotDecomposable {
                gate_name: self.to_string(),
            }),
        }
    }
}

impl<F: EigenFamily> ExtrapolatableGate for PowGate<F> {
    fn pow(&self, exponent: f64) -> IrResult<GateRef> {
        if !exponent.is_finite() {
            return Err(IrError::InvalidExponent {
                gate_name: self.to_string(),
                exponent,
            });
        }
        Ok(Arc::new(Self::try_with_global_shift(
            self.exponent * exponent,
            self.global_shift,
        )?))
    }
}

impl<F: EigenFamily> DiagrammableGate for PowGate<F> {
    fn diagram_info(&self, args: &DiagramArgs) -> DiagramInfo {
        if let Some(name) = F::rotation_name().filter(|_| self.global_shift == -0.5) {
            let label = format!("{name}({}π)", args.format_real(self.exponent));
            return DiagramInfo::per_qubit([label]);
        }
        DiagramInfo::per_qubit(F::wire_symbols(args)).with_exponent(self.exponent)
    }
}

/// Canonical text shared by most families: `NAME`, `NAME**e`, rotation form
/// `Rx(eπ)` at shift `-1/2`, and a `[shift=s]` suffix for other shifts.
pub fn default_fmt<F: EigenFamily>(
    name: &str,
    gate: &PowGate<F>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if let Some(rotation) = F::rotation_name().filter(|_| gate.global_shift == -0.5) {
        return write!(f, "{rotation}({}π)", gate.exponent);
    }
    if gate.exponent == 1.0 {
        f.write_str(name)?;
    } else {
        write!(f, "{name}**{}", gate.exponent)?;
    }
    if gate.global_shift != 0.0 {
        write!(f, "[shift={}]", gate.global_shift)?;
    }
    Ok(())
}

/// `Σ_λ exp(iπ·t·(λ + s)) · P_λ`.
pub fn eigen_unitary(components: &[EigenComponent], exponent: f64, global_shift: f64) -> Matrix {
    let dim = components.first().map_or(0, |c| c.projector.nrows());
    let mut result = Matrix::zeros((dim, dim));
    for component in components {
        let phase = Complex64::from_polar(1.0, PI * exponent * (component.half_turns + global_shift));
        result.scaled_add(phase, &component.projector);
    }
    result
}

/// Exponent period of a family at a given global shift.
///
/// `None` when every shifted eigenvalue is zero or the periods have no
/// common multiple with a small denominator.
pub fn period(components: &[EigenComponent], global_shift: f64) -> Option<f64> {
    let periods: Vec<f64> = components
        .iter()
        .map(|c| (c.half_turns + global_shift).abs())
        .filter(|x| *x > 1e-12)
        .map(|x| 2.0 / x)
        .collect();
    approximate_common_period(&periods)
}

/// Smallest positive number that is an integer multiple of every period.
pub fn approximate_common_period(periods: &[f64]) -> Option<f64> {
    let mut fractions = periods.iter().map(|&p| to_fraction(p));
    let (mut num, mut den) = fractions.next()??;
    for fraction in fractions {
        let (n, d) = fraction?;
        num = lcm(num, n)?;
        den = gcd(den, d);
    }
    Some(num as f64 / den as f64)
}

/// Map `exponent` into `(-period/2, period/2]`.
pub fn canonicalize_exponent(exponent: f64, period: Option<f64>) -> f64 {
    let Some(period) = period else {
        return exponent;
    };
    if !exponent.is_finite() {
        return exponent;
    }
    let half = period / 2.0;
    // Values already in range are kept bit-for-bit.
    let canonical = if exponent > -half && exponent <= half {
        exponent
    } else {
        half - (half - exponent).rem_euclid(period)
    };
    // Collapse -0.0 so equal gates hash equally.
    if canonical == 0.0 { 0.0 } else { canonical }
}

fn to_fraction(value: f64) -> Option<(u64, u64)> {
    (1..=MAX_PERIOD_DENOMINATOR).find_map(|den| {
        let num = (value * den as f64).round();
        ((num / den as f64 - value).abs() < 1e-9 && num >= 1.0).then_some((num as u64, den))
    })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
