//! Diagram info resolver.

use qop_ir::{Capability, Capable, DiagramArgs, DiagramInfo};
use tracing::debug;

use crate::error::{ProtocolError, ProtocolResult};

/// The diagram label of a gate or operation.
///
/// Fails with [`ProtocolError::CapabilityUnsupported`] when the value cannot
/// be drawn, and with [`ProtocolError::MalformedDiagramInfo`] when
/// `args.known_qubit_count` is set and a per-qubit label has a different
/// number of symbols.
pub fn diagram_info<V: Capable + ?Sized>(
    value: &V,
    args: &DiagramArgs,
) -> ProtocolResult<DiagramInfo> {
    try_diagram_info(value, args)?.ok_or_else(|| {
        debug!("No diagram info for {}", value.describe());
        ProtocolError::CapabilityUnsupported {
            capability: Capability::DiagramInfo,
            value: value.describe(),
        }
    })
}

/// The diagram label, or `Ok(None)` when the value cannot be drawn.
pub fn try_diagram_info<V: Capable + ?Sized>(
    value: &V,
    args: &DiagramArgs,
) -> ProtocolResult<Option<DiagramInfo>> {
    let Some(info) = value.query_diagram_info(args) else {
        return Ok(None);
    };
    if let (Some(expected), Some(got)) = (args.known_qubit_count, info.symbol_count()) {
        if expected != got {
            return Err(ProtocolError::MalformedDiagramInfo { expected, got });
        }
    }
    Ok(Some(info))
}

/// The diagram label, or `default` when the value cannot be drawn.
pub fn diagram_info_or<V: Capable + ?Sized>(
    value: &V,
    args: &DiagramArgs,
    default: DiagramInfo,
) -> ProtocolResult<DiagramInfo> {
    Ok(try_diagram_info(value, args)?.unwrap_or(default))
}
