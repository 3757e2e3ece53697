//! Connection validity rules.
//!
//! The same predicate is used while the editor is interactively dragging a
//! new edge and when replaying a persisted graph before compilation; both
//! call sites must see identical results for the same inputs.

use super::block::{Block, BlockKind};

/// The six legal (source kind, target kind) pairs. Every other pair is
/// illegal.
pub const LEGAL_PAIRS: [(BlockKind, BlockKind); 6] = [
    (BlockKind::Import, BlockKind::Transform),
    (BlockKind::Import, BlockKind::Comparison),
    (BlockKind::Transform, BlockKind::Transform),
    (BlockKind::Transform, BlockKind::Export),
    (BlockKind::Transform, BlockKind::Comparison),
    (BlockKind::Comparison, BlockKind::Export),
];

/// Decides whether an edge from `source` to `target` is legal.
///
/// Applies, in order: the positional rule (source must sit strictly left of
/// the target) and the kind-pair table. Side effect free; never errors.
pub fn is_valid_connection(source: &Block, target: &Block) -> bool {
    if source.position.x >= target.position.x {
        return false;
    }
    LEGAL_PAIRS.contains(&(source.kind, target.kind))
}

/// Human-readable reason for a rejected connection, used to build
/// `GraphError::InvalidConnection`. Mirrors the checks in
/// `is_valid_connection` exactly.
pub(super) fn rejection_reason(source: &Block, target: &Block) -> Option<String> {
    if source.position.x >= target.position.x {
        return Some(format!(
            "source must be positioned left of target ({} >= {})",
            source.position.x, target.position.x
        ));
    }
    if !LEGAL_PAIRS.contains(&(source.kind, target.kind)) {
        return Some(format!(
            "a {} block cannot feed a {} block",
            source.kind, target.kind
        ));
    }
    None
}
