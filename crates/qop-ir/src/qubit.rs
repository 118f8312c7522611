//! Qubit identifiers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque identifier for a qubit slot.
///
/// Identifiers are immutable, hashable and totally ordered. The ordering is
/// only used for canonical display: line qubits sort before grid qubits,
/// grid qubits before named qubits, and named qubits use natural ordering
/// so that `a2` sorts before `a10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QubitId {
    /// A qubit at an integer position on a line.
    Line(i32),
    /// A qubit at a position on a 2-D grid.
    Grid {
        /// Row index.
        row: i32,
        /// Column index.
        col: i32,
    },
    /// A qubit identified by name.
    Named(String),
}

impl QubitId {
    /// Create a line qubit.
    pub fn line(x: i32) -> Self {
        QubitId::Line(x)
    }

    /// Create a grid qubit.
    pub fn grid(row: i32, col: i32) -> Self {
        QubitId::Grid { row, col }
    }

    /// Create a named qubit.
    pub fn named(name: impl Into<String>) -> Self {
        QubitId::Named(name.into())
    }

    /// Create the line qubits `0..n`.
    pub fn line_range(n: i32) -> Vec<Self> {
        (0..n).map(QubitId::Line).collect()
    }

    fn kind_rank(&self) -> u8 {
        match self {
            QubitId::Line(_) => 0,
            QubitId::Grid { .. } => 1,
            QubitId::Named(_) => 2,
        }
    }
}

impl Ord for QubitId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (QubitId::Line(a), QubitId::Line(b)) => a.cmp(b),
            (QubitId::Grid { row: r1, col: c1 }, QubitId::Grid { row: r2, col: c2 }) => {
                (r1, c1).cmp(&(r2, c2))
            }
            (QubitId::Named(a), QubitId::Named(b)) => natural_cmp(a, b).then_with(|| a.cmp(b)),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for QubitId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitId::Line(x) => write!(f, "q({x})"),
            QubitId::Grid { row, col } => write!(f, "q({row}, {col})"),
            QubitId::Named(name) => f.write_str(name),
        }
    }
}

impl From<i32> for QubitId {
    fn from(x: i32) -> Self {
        QubitId::Line(x)
    }
}

impl From<&str> for QubitId {
    fn from(name: &str) -> Self {
        QubitId::Named(name.to_string())
    }
}

/// Compare two names treating embedded digit runs as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => {
                        let x = x.trim_start_matches('0');
                        let y = y.trim_start_matches('0');
                        x.len().cmp(&y.len()).then_with(|| x.cmp(y))
                    }
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Splits a string into maximal runs of digits and non-digits.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digit = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digit)
            .map_or(self.rest.len(), |(i, _)| i);
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(QubitId::line(3).to_string(), "q(3)");
        assert_eq!(QubitId::grid(1, 2).to_string(), "q(1, 2)");
        assert_eq!(QubitId::named("anc").to_string(), "anc");
    }

    #[test]
    fn test_kind_ordering() {
        let mut qubits = vec![
            QubitId::named("a"),
            QubitId::grid(0, 0),
            QubitId::line(5),
            QubitId::line(-1),
        ];
        qubits.sort();
        assert_eq!(
            qubits,
            vec![
                QubitId::line(-1),
                QubitId::line(5),
                QubitId::grid(0, 0),
                QubitId::named("a"),
            ]
        );
    }

    #[test]
    fn test_natural_name_ordering() {
        let mut qubits: Vec<QubitId> = ["a10", "a2", "b", "a02", "a"]
            .into_iter()
            .map(QubitId::from)
            .collect();
        qubits.sort();
        let names: Vec<String> = qubits.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a", "a02", "a2", "a10", "b"]);
    }

    #[test]
    fn test_grid_ordering_is_row_major() {
        assert!(QubitId::grid(0, 5) < QubitId::grid(1, 0));
        assert!(QubitId::grid(1, 0) < QubitId::grid(1, 1));
    }
}
