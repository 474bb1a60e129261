//! Game-state tree generation for Tic-Tac-Toe ("gato") with symmetry reduction
//!
//! This crate provides:
//! - Complete board representation with single-move win detection
//! - The eight symmetries of the square (D4) as explicit cell permutations
//! - Successor generation with symmetric-duplicate pruning
//! - An arena-backed game tree with non-owning parent back-references
//! - State-space validation and export tools

pub mod board;
pub mod error;
pub mod export;
pub mod game;
pub mod identifiers;
pub mod lines;
pub mod symmetry;
pub mod tree;
pub mod validation;

pub use board::{BoardState, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use identifiers::{MoveId, StateId};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::D4Transform;
pub use tree::{GameTree, NodeId, collect_canonical_labels};
