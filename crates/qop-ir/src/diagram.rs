//! Diagram label types.
//!
//! Gates describe how they would like to be drawn; rendering itself is left
//! to external tools.

use serde::{Deserialize, Serialize};

/// Hints passed to gates when asking for a diagram label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramArgs {
    /// Number of qubits the label will be drawn on, when known.
    pub known_qubit_count: Option<usize>,
    /// Digits used when formatting exponent annotations. `None` means full precision.
    pub precision: Option<usize>,
    /// Whether non-ASCII symbols may be used.
    pub use_unicode: bool,
}

impl Default for DiagramArgs {
    fn default() -> Self {
        Self {
            known_qubit_count: None,
            precision: Some(3),
            use_unicode: true,
        }
    }
}

impl DiagramArgs {
    /// Set the known qubit count.
    #[must_use]
    pub fn with_known_qubit_count(mut self, count: usize) -> Self {
        self.known_qubit_count = Some(count);
        self
    }

    /// Set the annotation precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Restrict symbols to ASCII.
    #[must_use]
    pub fn ascii(mut self) -> Self {
        self.use_unicode = false;
        self
    }

    /// Format a number for an annotation, honoring `precision`.
    pub fn format_real(&self, value: f64) -> String {
        match self.precision {
            Some(digits) => {
                let formatted = format!("{value:.digits$}");
                if formatted.contains('.') {
                    formatted
                        .trim_end_matches('0')
                        .trim_end_matches('.')
                        .to_string()
                } else {
                    formatted
                }
            }
            None => format!("{value}"),
        }
    }
}

/// Symbols drawn on the wires an operation touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireSymbols {
    /// One name repeated on every touched qubit.
    Uniform(String),
    /// One symbol per touched qubit, in operation order.
    PerQubit(Vec<String>),
}

/// A compact label for drawing a gate or operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramInfo {
    /// Wire symbols.
    pub symbols: WireSymbols,
    /// Exponent annotation, omitted when it is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponent: Option<f64>,
    /// Whether the wires should be drawn connected by a vertical line.
    pub connected: bool,
}

impl DiagramInfo {
    /// A label that draws `name` on every touched qubit.
    pub fn uniform(name: impl Into<String>) -> Self {
        Self {
            symbols: WireSymbols::Uniform(name.into()),
            exponent: None,
            connected: true,
        }
    }

    /// A label with one symbol per touched qubit.
    pub fn per_qubit<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: WireSymbols::PerQubit(symbols.into_iter().map(Into::into).collect()),
            exponent: None,
            connected: true,
        }
    }

    /// Attach an exponent annotation. Exponent 1 is not annotated.
    #[must_use]
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = (exponent != 1.0).then_some(exponent);
        self
    }

    /// Mark the wires as drawn independently.
    #[must_use]
    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    /// Number of symbols, if the label is per-qubit.
    pub fn symbol_count(&self) -> Option<usize> {
        match &self.symbols {
            WireSymbols::Uniform(_) => None,
            WireSymbols::PerQubit(symbols) => Some(symbols.len()),
        }
    }

    /// Expand the label to exactly `n` symbols.
    ///
    /// Per-qubit labels shorter than `n` repeat their last symbol.
    pub fn symbols_for(&self, n: usize) -> Vec<String> {
        match &self.symbols {
            WireSymbols::Uniform(name) => vec![name.clone(); n],
            WireSymbols::PerQubit(symbols) => (0..n)
                .map(|i| {
                    symbols
                        .get(i)
                        .or_else(|| symbols.last())
                        .cloned()
                        .unwrap_or_default()
                })
                .collect(),
        }
    }

    /// The formatted exponent annotation, e.g. `^0.5`.
    pub fn exponent_suffix(&self, args: &DiagramArgs) -> Option<String> {
        self.exponent.map(|e| format!("^{}", args.format_real(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_expansion() {
        let info = DiagramInfo::uniform("M");
        assert_eq!(info.symbols_for(3), vec!["M", "M", "M"]);
        assert_eq!(info.symbol_count(), None);
    }

    #[test]
    fn test_exponent_suffix() {
        let args = DiagramArgs::default();
        let info = DiagramInfo::per_qubit(["@", "X"]).with_exponent(0.5);
        assert_eq!(info.exponent_suffix(&args).as_deref(), Some("^0.5"));

        let info = DiagramInfo::per_qubit(["X"]).with_exponent(1.0);
        assert_eq!(info.exponent_suffix(&args), None);

        let info = DiagramInfo::uniform("Z").with_exponent(1.0 / 3.0);
        assert_eq!(info.exponent_suffix(&args).as_deref(), Some("^0.333"));
        let full = args.with_precision(None);
        assert!(info.exponent_suffix(&full).unwrap().starts_with("^0.33333"));
    }

    #[test]
    fn test_format_real_trims_zeros() {
        let args = DiagramArgs::default();
        assert_eq!(args.format_real(-0.25), "-0.25");
        assert_eq!(args.format_real(2.0), "2");
    }
}
