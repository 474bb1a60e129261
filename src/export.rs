//! Export of expanded game trees for analysis
//!
//! Flattens a [`GameTree`] into per-node records and writes them as JSON or
//! CSV. The records are a debugging/analysis surface, not a stable wire
//! format.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::identifiers::{MoveId, StateId};
use crate::tree::GameTree;

/// One exported node of an expanded tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u32,
    pub label: StateId,
    pub parent: Option<u32>,
    /// Transition that produced this node, `"<parent label>_<position>"`
    pub move_id: Option<MoveId>,
    /// Cell played to reach this node from its parent
    pub position: Option<usize>,
    pub depth: usize,
    pub move_count: usize,
    pub terminal: bool,
    pub winner: Option<char>,
    pub child_count: usize,
}

/// Flatten a tree into records, in node-creation order
pub fn tree_records(tree: &GameTree) -> Vec<NodeRecord> {
    tree.node_ids()
        .map(|id| {
            let state = tree.state(id);
            let (parent, move_id, position) = match tree.parent(id) {
                Some(parent_id) => {
                    let parent_state = tree.state(parent_id);
                    let position = parent_state.find_changed_position(state);
                    let move_id = position
                        .map(|pos| MoveId::new(format!("{}_{pos}", parent_state.encode())));
                    (Some(parent_id.as_u32()), move_id, position)
                }
                None => (None, None, None),
            };

            NodeRecord {
                id: id.as_u32(),
                label: StateId::new(state.encode()),
                parent,
                move_id,
                position,
                depth: tree.depth(id),
                move_count: state.move_count(),
                terminal: state.is_terminal(),
                winner: state.winner().map(|p| p.to_cell().to_char()),
                child_count: tree.child_count(id),
            }
        })
        .collect()
}

/// Write the tree as a JSON array of node records.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_json(tree: &GameTree, path: &Path) -> Result<()> {
    let records = tree_records(tree);
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;
    Ok(())
}

/// Write the tree as CSV, one row per node.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record fails to
/// serialize.
pub fn write_csv(tree: &GameTree, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in tree_records(tree) {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| Error::Io {
        operation: format!("flush {}", path.display()),
        source,
    })?;
    Ok(())
}
