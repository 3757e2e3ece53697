//! Topological scheduling of the pipeline graph.
//!
//! Kahn's algorithm over the block/edge adjacency, with a stable tie-break by
//! block insertion order so regenerating code for an unchanged graph is
//! deterministic. Cycle detection is performed here defensively even though
//! edge creation already rejects backwards connections: the graph is mutable
//! and could in principle be corrupted by a caller that bypasses
//! `Project::connect`.

use crate::error::GraphError;
use crate::graph::{BlockKind, Project};
use ahash::AHashMap;
use std::collections::BTreeSet;

/// The result of a successful scheduling pass.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Block ids in executable order.
    blocks: Vec<String>,
    /// Export blocks with zero incoming edges. Scheduling keeps them (the
    /// graph is not broken, just incomplete); the code generator skips them
    /// with a warning comment instead of emitting dead writes.
    disconnected_exports: Vec<String>,
}

impl Schedule {
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn disconnected_exports(&self) -> &[String] {
        &self.disconnected_exports
    }

    pub fn is_disconnected_export(&self, block_id: &str) -> bool {
        self.disconnected_exports.iter().any(|id| id == block_id)
    }

    /// Upgrades the disconnected-export flag to a hard error, for callers
    /// that want a fully wired graph or nothing.
    pub fn require_connected_exports(&self) -> Result<(), GraphError> {
        match self.disconnected_exports.first() {
            Some(block_id) => Err(GraphError::DisconnectedExport {
                block_id: block_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Orders the project's blocks into an executable sequence.
///
/// Failure conditions, checked in this order: `UnboundBlock` (a block with no
/// bound action), `IncompleteComparisonInputs` (a comparison block with ≠ 2
/// incoming edges), `CycleDetected` (the sort terminated with unprocessed
/// blocks remaining).
pub fn order(project: &Project) -> Result<Schedule, GraphError> {
    for block in project.blocks() {
        if block.action_id.is_none() {
            return Err(GraphError::UnboundBlock {
                block_id: block.id.clone(),
            });
        }
    }

    for block in project.blocks() {
        if block.kind == BlockKind::Comparison {
            let found = project.incoming(&block.id).len();
            if found != 2 {
                return Err(GraphError::IncompleteComparisonInputs {
                    block_id: block.id.clone(),
                    found,
                });
            }
        }
    }

    let index_of: AHashMap<&str, usize> = project
        .blocks()
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id.as_str(), i))
        .collect();

    let mut indegree = vec![0usize; project.blocks().len()];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); project.blocks().len()];
    for edge in project.edges() {
        // Edges referencing unknown blocks cannot exist through the validated
        // API; skip rather than panic if a caller corrupted the graph.
        let (Some(&src), Some(&tgt)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) else {
            continue;
        };
        indegree[tgt] += 1;
        successors[src].push(tgt);
    }

    // Ready set keyed by insertion index: popping the smallest gives the
    // stable tie-break.
    let mut ready: BTreeSet<usize> = indegree
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d == 0)
        .map(|(i, _)| i)
        .collect();

    let mut ordered = Vec::with_capacity(project.blocks().len());
    let mut visited = vec![false; project.blocks().len()];
    while let Some(i) = ready.pop_first() {
        visited[i] = true;
        ordered.push(project.blocks()[i].id.clone());
        for &succ in &successors[i] {
            indegree[succ] -= 1;
            if indegree[succ] == 0 {
                ready.insert(succ);
            }
        }
    }

    if ordered.len() != project.blocks().len() {
        let block_ids = project
            .blocks()
            .iter()
            .enumerate()
            .filter(|(i, _)| !visited[*i])
            .map(|(_, b)| b.id.clone())
            .collect();
        return Err(GraphError::CycleDetected { block_ids });
    }

    let disconnected_exports = project
        .blocks()
        .iter()
        .filter(|b| b.kind == BlockKind::Export && project.incoming(&b.id).is_empty())
        .map(|b| b.id.clone())
        .collect();

    Ok(Schedule {
        blocks: ordered,
        disconnected_exports,
    })
}
