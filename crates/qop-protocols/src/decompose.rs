//! Decomposition engine.
//!
//! [`decompose_once`] asks a single operation for its one-level rewrite.
//! [`Decomposer`] repeats that until every produced operation is either kept
//! by a predicate or cannot be expanded further. Expansion is depth-first and
//! left-to-right, driven by an explicit worklist so that deep chains cannot
//! exhaust the call stack.
//!
//! For each operation taken from the worklist:
//!
//! 1. if the keep predicate accepts it, it is emitted;
//! 2. otherwise the intercepting decomposer is asked first, then the gate's
//!    own decomposition;
//! 3. the produced operations are pushed at `depth + 1`;
//! 4. an operation with no decomposition is emitted unchanged when no keep
//!    predicate is configured, and is a [`ProtocolError::DecompositionStuck`]
//!    error otherwise.

use std::fmt;

use qop_ir::operation::validate_qubits;
use qop_ir::{Capability, Gate, Operation, QubitId};
use tracing::{debug, instrument, trace};

use crate::config::DecomposeConfig;
use crate::error::{ProtocolError, ProtocolResult, StuckReason};

/// Depth bound used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Keep predicate: `true` means the operation is already acceptable.
pub type KeepFn<'a> = dyn Fn(&Operation) -> bool + 'a;

/// Intercepting decomposer: `Ok(None)` defers to the gate's own rule.
pub type InterceptFn<'a> = dyn Fn(&Operation) -> ProtocolResult<Option<Vec<Operation>>> + 'a;

/// Decompose `op` one level, or `Ok(None)` when it has no decomposition.
pub fn try_decompose_once(op: &Operation) -> ProtocolResult<Option<Vec<Operation>>> {
    match op.gate().as_decomposable() {
        Some(decomposable) => Ok(Some(decomposable.decompose(op.qubits())?)),
        None => Ok(None),
    }
}

/// Decompose `op` one level.
///
/// Fails with [`ProtocolError::CapabilityUnsupported`] when the gate has no
/// decomposition.
pub fn decompose_once(op: &Operation) -> ProtocolResult<Vec<Operation>> {
    try_decompose_once(op)?.ok_or_else(|| ProtocolError::CapabilityUnsupported {
        capability: Capability::Decomposable,
        value: op.to_string(),
    })
}

/// Decompose `op` one level, or return `default` when it has no decomposition.
pub fn decompose_once_or(op: &Operation, default: Vec<Operation>) -> ProtocolResult<Vec<Operation>> {
    Ok(try_decompose_once(op)?.unwrap_or(default))
}

/// Decompose `gate` as applied to `qubits`.
///
/// The qubits are validated against the gate's arity before the gate is
/// asked for its rewrite.
pub fn decompose_once_with_qubits(
    gate: &dyn Gate,
    qubits: &[QubitId],
) -> ProtocolResult<Vec<Operation>> {
    validate_qubits(gate, qubits)?;
    let decomposable =
        gate.as_decomposable()
            .ok_or_else(|| ProtocolError::CapabilityUnsupported {
                capability: Capability::Decomposable,
                value: gate.to_string(),
            })?;
    Ok(decomposable.decompose(qubits)?)
}

/// Recursively decompose `op`.
///
/// Only operations at depth `< max_depth` are expanded; roots are at depth 0.
pub fn decompose(
    op: &Operation,
    keep: Option<&KeepFn<'_>>,
    intercepting: Option<&InterceptFn<'_>>,
    max_depth: usize,
) -> ProtocolResult<Vec<Operation>> {
    let mut decomposer = Decomposer::new().max_depth(max_depth);
    if let Some(keep) = keep {
        decomposer = decomposer.keep(keep);
    }
    if let Some(intercepting) = intercepting {
        decomposer = decomposer.intercepting(intercepting);
    }
    decomposer.run(op)
}

/// Configurable recursive decomposition.
pub struct Decomposer<'a> {
    keep: Option<Box<KeepFn<'a>>>,
    intercepting: Option<Box<InterceptFn<'a>>>,
    max_depth: usize,
    emit_undecomposable: bool,
}

impl<'a> Decomposer<'a> {
    /// A decomposer that flattens as far as possible, bounded by
    /// [`DEFAULT_MAX_DEPTH`].
    pub fn new() -> Self {
        Self {
            keep: None,
            intercepting: None,
            max_depth: DEFAULT_MAX_DEPTH,
            emit_undecomposable: false,
        }
    }

    /// Build a decomposer from configuration.
    pub fn from_config(config: &DecomposeConfig) -> Self {
        Self::new()
            .max_depth(config.max_depth)
            .emit_undecomposable(config.emit_undecomposable)
    }

    /// Stop at operations accepted by `keep`.
    #[must_use]
    pub fn keep(mut self, keep: impl Fn(&Operation) -> bool + 'a) -> Self {
        self.keep = Some(Box::new(keep));
        self
    }

    /// Consult `intercepting` before the gate's own decomposition.
    #[must_use]
    pub fn intercepting(
        mut self,
        intercepting: impl Fn(&Operation) -> ProtocolResult<Option<Vec<Operation>>> + 'a,
    ) -> Self {
        self.intercepting = Some(Box::new(intercepting));
        self
    }

    /// Only operations at depth `< max_depth` may be expanded.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Emit operations without a decomposition instead of failing, even
    /// when a keep predicate is set.
    #[must_use]
    pub fn emit_undecomposable(mut self, emit: bool) -> Self {
        self.emit_undecomposable = emit;
        self
    }

    /// Decompose a single operation.
    #[instrument(skip(self, op), fields(operation = %op))]
    pub fn run(&self, op: &Operation) -> ProtocolResult<Vec<Operation>> {
        let mut output = Vec::new();
        self.expand_into(op, &mut output)?;
        debug!("Decomposed {} into {} operations", op, output.len());
        Ok(output)
    }

    /// Decompose each operation in order and concatenate the results.
    #[instrument(skip_all, fields(count = ops.len()))]
    pub fn run_all(&self, ops: &[Operation]) -> ProtocolResult<Vec<Operation>> {
        let mut output = Vec::new();
        for op in ops {
            self.expand_into(op, &mut output)?;
        }
        debug!("Decomposed {} roots into {} operations", ops.len(), output.len());
        Ok(output)
    }

    fn expand_into(&self, root: &Operation, output: &mut Vec<Operation>) -> ProtocolResult<()> {
        let mut stack: Vec<(Operation, usize)> = vec![(root.clone(), 0)];

        while let Some((op, depth)) = stack.pop() {
            trace!("Visiting {} at depth {}", op, depth);

            if self.keep.as_ref().is_some_and(|keep| keep(&op)) {
                output.push(op);
                continue;
            }

            let Some(children) = self.expand_one(&op)? else {
                if self.keep.is_none() || self.emit_undecomposable {
                    output.push(op);
                    continue;
                }
                return Err(stuck(&op, depth, StuckReason::Undecomposable));
            };

            if depth >= self.max_depth {
                let max_depth = self.max_depth;
                return Err(stuck(&op, depth, StuckReason::DepthExceeded { max_depth }));
            }
            if children.len() == 1 && children[0] == op {
                return Err(stuck(&op, depth, StuckReason::NoProgress));
            }

            // Reverse so the first child is popped first.
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }

    fn expand_one(&self, op: &Operation) -> ProtocolResult<Option<Vec<Operation>>> {
        if let Some(intercepting) = &self.intercepting {
            if let Some(children) = intercepting(op)? {
                debug!("Intercepted {}", op);
                return Ok(Some(children));
            }
        }
        try_decompose_once(op)
    }
}

impl Default for Decomposer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Decomposer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decomposer")
            .field("keep", &self.keep.is_some())
            .field("intercepting", &self.intercepting.is_some())
            .field("max_depth", &self.max_depth)
            .field("emit_undecomposable", &self.emit_undecomposable)
            .finish()
    }
}

fn stuck(op: &Operation, depth: usize, reason: StuckReason) -> ProtocolError {
    debug!("Decomposition stuck at {} (depth {}): {}", op, depth, reason);
    ProtocolError::DecompositionStuck {
        operation: op.to_string(),
        depth,
        reason,
    }
}
