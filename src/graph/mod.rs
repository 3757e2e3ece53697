pub mod block;
pub mod edge;
pub mod validate;

pub use block::*;
pub use edge::*;
pub use validate::is_valid_connection;

use crate::action::Action;
use crate::bind::resolve_config;
use crate::error::GraphError;

/// The pipeline graph: blocks plus directed edges, in insertion order.
///
/// Insertion order is load-bearing: the scheduler's tie-break and the
/// comparison operand fallback both depend on it, so the vectors are never
/// reordered.
#[derive(Debug, Clone, Default)]
pub struct Project {
    blocks: Vec<Block>,
    edges: Vec<Edge>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Incoming edges of a block, in insertion order.
    pub fn incoming(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.target == id).collect()
    }

    /// Outgoing edges of a block, in insertion order.
    pub fn outgoing(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.source == id).collect()
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Adds an edge after validating it. This is the only edge-creation path;
    /// violating edges are rejected, not silently dropped.
    pub fn connect(&mut self, edge: Edge) -> Result<(), GraphError> {
        let source = self
            .block(&edge.source)
            .ok_or_else(|| GraphError::BlockNotFound {
                block_id: edge.source.clone(),
            })?;
        let target = self
            .block(&edge.target)
            .ok_or_else(|| GraphError::BlockNotFound {
                block_id: edge.target.clone(),
            })?;

        if let Some(reason) = validate::rejection_reason(source, target) {
            return Err(GraphError::InvalidConnection {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
                reason,
            });
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Adds an edge without validation. Intended for trusted replay of
    /// already-validated graphs; the scheduler still detects cycles and
    /// dangling references defensively, so a corrupted edge fails later with
    /// a typed error instead of undefined behavior.
    pub fn add_edge_unchecked(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Removes a block and cascades removal of every incident edge.
    pub fn remove_block(&mut self, id: &str) {
        self.blocks.retain(|b| b.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
    }

    pub fn remove_edge(&mut self, id: &str) {
        self.edges.retain(|e| e.id != id);
    }

    /// Binds an action to a block, enforcing the fixed kind mapping
    /// (import⇒input, transform⇒transform, comparison⇒comparison,
    /// export⇒output) and seeding the block's config from the action's
    /// schema. Mismatched kinds are rejected, never coerced.
    pub fn bind_action(&mut self, block_id: &str, action: &Action) -> Result<(), GraphError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.id == block_id)
            .ok_or_else(|| GraphError::BlockNotFound {
                block_id: block_id.to_string(),
            })?;

        let required = block.kind.required_action_kind();
        if action.kind != required {
            return Err(GraphError::ActionKindMismatch {
                block_id: block_id.to_string(),
                action_id: action.id.clone(),
                action_kind: action.kind.to_string(),
                required_kind: required.to_string(),
            });
        }

        block.action_id = Some(action.id.clone());
        block.config = resolve_config(block, action);
        Ok(())
    }
}
