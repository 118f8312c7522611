//! Capability tags and the value-level capability queries.
//!
//! A gate opts into each capability by exposing the matching facet trait
//! (see [`crate::gate`]). The [`Capable`] and [`Extrapolatable`] traits lift
//! those facets to every value the algorithms accept: gates, operations and,
//! for inversion, operation sequences. Every query is tri-state: a concrete
//! result, `None` for "unsupported", or a typed error for malformed input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diagram::{DiagramArgs, DiagramInfo};
use crate::error::IrResult;
use crate::gate::{Gate, GateRef};
use crate::matrix::Matrix;
use crate::operation::Operation;

/// One of the optional behaviors a gate may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    /// Matrix extraction.
    Unitary,
    /// One-level rewriting into simpler operations.
    Decomposable,
    /// Continuous exponentiation and inversion.
    Extrapolatable,
    /// Diagram labeling.
    DiagramInfo,
}

impl Capability {
    /// All capability tags, in declaration order.
    pub const ALL: [Capability; 4] = [
        Capability::Unitary,
        Capability::Decomposable,
        Capability::Extrapolatable,
        Capability::DiagramInfo,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Unitary => "UNITARY",
            Capability::Decomposable => "DECOMPOSABLE",
            Capability::Extrapolatable => "EXTRAPOLATABLE",
            Capability::DiagramInfo => "DIAGRAM_INFO",
        })
    }
}

/// A set of capability tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a capability.
    #[must_use]
    pub fn with(mut self, capability: Capability) -> Self {
        self.insert(capability);
        self
    }

    /// Add a capability in place.
    pub fn insert(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    /// Add a capability when `condition` holds.
    #[must_use]
    pub fn with_if(self, capability: Capability, condition: bool) -> Self {
        if condition { self.with(capability) } else { self }
    }

    /// Check membership.
    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Check whether no capability is present.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of capabilities present.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the present capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), CapabilitySet::with)
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, capability) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{capability}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Capability>::deserialize(deserializer)?
            .into_iter()
            .collect())
    }
}

/// Values that can name themselves in errors and logs.
pub trait Describe {
    /// A short description, normally the canonical textual form.
    fn describe(&self) -> String;
}

/// Capability queries shared by gates and operations.
pub trait Capable: Describe {
    /// The capabilities this value supports.
    fn capability_set(&self) -> CapabilitySet;

    /// Query the unitary capability. `None` means unsupported.
    fn query_unitary(&self) -> Option<Matrix>;

    /// Query the diagram capability. `None` means unsupported.
    fn query_diagram_info(&self, args: &DiagramArgs) -> Option<DiagramInfo>;
}

/// The exponentiation query.
pub trait Extrapolatable: Describe {
    /// The type produced by exponentiation.
    type Output;

    /// Raise this value to `exponent`.
    ///
    /// `None` means unsupported; `Some(Err(_))` means the exponent was rejected.
    fn query_pow(&self, exponent: f64) -> Option<IrResult<Self::Output>>;
}

impl<G: Gate + ?Sized> Describe for G {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for Operation {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for [Operation] {
    fn describe(&self) -> String {
        let parts: Vec<String> = self.iter().map(ToString::to_string).collect();
        format!("[{}]", parts.join(", "))
    }
}

impl<G: Gate + ?Sized> Capable for G {
    fn capability_set(&self) -> CapabilitySet {
        self.capabilities()
    }

    fn query_unitary(&self) -> Option<Matrix> {
        self.as_unitary().map(|u| u.unitary())
    }

    fn query_diagram_info(&self, args: &DiagramArgs) -> Option<DiagramInfo> {
        self.as_diagrammable().map(|d| d.diagram_info(args))
    }
}

impl Capable for Operation {
    fn capability_set(&self) -> CapabilitySet {
        self.gate().capabilities()
    }

    fn query_unitary(&self) -> Option<Matrix> {
        self.gate().query_unitary()
    }

    fn query_diagram_info(&self, args: &DiagramArgs) -> Option<DiagramInfo> {
        self.gate().query_diagram_info(args)
    }
}

impl<G: Gate + ?Sized> Extrapolatable for G {
    type Output = GateRef;

    fn query_pow(&self, exponent: f64) -> Option<IrResult<GateRef>> {
        self.as_extrapolatable().map(|e| e.pow(exponent))
    }
}

impl Extrapolatable for Operation {
    type Output = Operation;

    fn query_pow(&self, exponent: f64) -> Option<IrResult<Operation>> {
        let powered = self.gate().query_pow(exponent)?;
        Some(powered.and_then(|gate| self.with_gate(gate)))
    }
}

/// Operation sequences support exactly one exponent, `-1`: the reversed
/// sequence of individually inverted operations. The result is
/// all-or-nothing: if any element cannot be inverted the whole query is
/// unsupported.
impl Extrapolatable for [Operation] {
    type Output = Vec<Operation>;

    fn query_pow(&self, exponent: f64) -> Option<IrResult<Vec<Operation>>> {
        if exponent != -1.0 {
            return None;
        }
        let mut inverted = Vec::with_capacity(self.len());
        for op in self.iter().rev() {
            match op.query_pow(-1.0)? {
                Ok(inv) => inverted.push(inv),
                Err(e) => return Some(Err(e)),
            }
        }
        Some(Ok(inverted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_set_membership() {
        let set = CapabilitySet::empty()
            .with(Capability::Unitary)
            .with(Capability::DiagramInfo);
        assert!(set.contains(Capability::Unitary));
        assert!(!set.contains(Capability::Decomposable));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "{UNITARY, DIAGRAM_INFO}");
        assert!(CapabilitySet::empty().is_empty());
    }

    #[test]
    fn test_capability_set_from_iter() {
        let set: CapabilitySet = [Capability::Extrapolatable, Capability::Unitary]
            .into_iter()
            .collect();
        let tags: Vec<Capability> = set.iter().collect();
        assert_eq!(tags, vec![Capability::Unitary, Capability::Extrapolatable]);
    }

    #[test]
    fn test_with_if() {
        let set = CapabilitySet::empty()
            .with_if(Capability::Decomposable, false)
            .with_if(Capability::Unitary, true);
        assert_eq!(set, CapabilitySet::empty().with(Capability::Unitary));
    }

    #[test]
    fn test_capability_set_serde() {
        let set = CapabilitySet::empty()
            .with(Capability::DiagramInfo)
            .with(Capability::Unitary);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["UNITARY","DIAGRAM_INFO"]"#);
        let back: CapabilitySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
