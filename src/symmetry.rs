//! The eight symmetries of the square (dihedral group D4) as cell
//! permutations
//!
//! Every transform is an exact integer permutation of the 3x3 index space,
//! written out as a literal table. The quarter turn is the one hand-derived
//! rotation table; the half and three-quarter turns are obtained by
//! composing it with itself rather than being derived independently.

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Cell};

/// A permutation of the nine cell indices; `perm[i]` is the index cell `i`
/// lands on.
pub type CellPermutation = [usize; 9];

const IDENTITY: CellPermutation = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Clockwise quarter turn: (row, col) -> (col, 2 - row)
const ROTATE_90: CellPermutation = [2, 5, 8, 1, 4, 7, 0, 3, 6];

const ROTATE_180: CellPermutation = compose(ROTATE_90, ROTATE_90);
const ROTATE_270: CellPermutation = compose(ROTATE_180, ROTATE_90);

/// Reflection across the horizontal axis: (row, col) -> (2 - row, col)
const REFLECT_HORIZONTAL: CellPermutation = [6, 7, 8, 3, 4, 5, 0, 1, 2];

/// Reflection across the vertical axis: (row, col) -> (row, 2 - col)
const REFLECT_VERTICAL: CellPermutation = [2, 1, 0, 5, 4, 3, 8, 7, 6];

/// Reflection across the main diagonal `\` (transpose)
const REFLECT_MAIN_DIAGONAL: CellPermutation = [0, 3, 6, 1, 4, 7, 2, 5, 8];

/// Reflection across the anti-diagonal `/`: (row, col) -> (2 - col, 2 - row)
const REFLECT_ANTI_DIAGONAL: CellPermutation = [8, 5, 2, 7, 4, 1, 6, 3, 0];

/// Compose two permutations: apply `first`, then `then`.
const fn compose(first: CellPermutation, then: CellPermutation) -> CellPermutation {
    let mut result = [0usize; 9];
    let mut i = 0;
    while i < 9 {
        result[i] = then[first[i]];
        i += 1;
    }
    result
}

/// One of the eight symmetries of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum D4Transform {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    ReflectHorizontal,
    ReflectVertical,
    ReflectMainDiagonal,
    ReflectAntiDiagonal,
}

impl D4Transform {
    /// All eight transforms, identity first
    pub const ALL: [D4Transform; 8] = [
        D4Transform::Identity,
        D4Transform::Rotate90,
        D4Transform::Rotate180,
        D4Transform::Rotate270,
        D4Transform::ReflectHorizontal,
        D4Transform::ReflectVertical,
        D4Transform::ReflectMainDiagonal,
        D4Transform::ReflectAntiDiagonal,
    ];

    /// The cell permutation this transform applies
    pub const fn permutation(self) -> &'static CellPermutation {
        match self {
            D4Transform::Identity => &IDENTITY,
            D4Transform::Rotate90 => &ROTATE_90,
            D4Transform::Rotate180 => &ROTATE_180,
            D4Transform::Rotate270 => &ROTATE_270,
            D4Transform::ReflectHorizontal => &REFLECT_HORIZONTAL,
            D4Transform::ReflectVertical => &REFLECT_VERTICAL,
            D4Transform::ReflectMainDiagonal => &REFLECT_MAIN_DIAGONAL,
            D4Transform::ReflectAntiDiagonal => &REFLECT_ANTI_DIAGONAL,
        }
    }

    /// Where `pos` lands under this transform
    pub fn transform_position(self, pos: usize) -> usize {
        self.permutation()[pos]
    }

    /// The transform that undoes this one. Rotations invert to the opposite
    /// rotation; every reflection is its own inverse.
    pub fn inverse(self) -> D4Transform {
        match self {
            D4Transform::Rotate90 => D4Transform::Rotate270,
            D4Transform::Rotate270 => D4Transform::Rotate90,
            other => other,
        }
    }

    /// Apply the transform to a cell grid
    pub fn apply_to_cells(self, cells: &[Cell; 9]) -> [Cell; 9] {
        let perm = self.permutation();
        let mut out = [Cell::Empty; 9];
        for (idx, &cell) in cells.iter().enumerate() {
            out[perm[idx]] = cell;
        }
        out
    }
}

impl BoardState {
    /// Apply a D4 transform to the board, keeping turn and bookkeeping
    pub fn transform(&self, t: D4Transform) -> Self {
        self.with_cells(t.apply_to_cells(&self.cells))
    }

    /// Decide whether two boards are the same position up to symmetry.
    ///
    /// Two boards are equivalent iff direct cell-for-cell equality holds or
    /// any of the seven nontrivial transforms maps one grid exactly onto the
    /// other. The relation compares grids only; it is distinct from the
    /// structural `PartialEq` on `BoardState`, which callers expecting
    /// "identical state" should use instead.
    ///
    /// The relation is symmetric: for every transform mapping `other` onto
    /// `self`, its inverse maps `self` onto `other`.
    pub fn symmetric_to(&self, other: &BoardState) -> bool {
        D4Transform::ALL
            .iter()
            .any(|&t| t.apply_to_cells(&other.cells) == self.cells)
    }

    /// Get the canonical (lexicographically minimal encoding) form of this
    /// board under the eight symmetries.
    pub fn canonical(&self) -> Self {
        let mut best = *self;
        let mut best_encoding = self.encode();
        for &t in &D4Transform::ALL[1..] {
            let candidate = self.transform(t);
            let encoding = candidate.encode();
            if encoding < best_encoding {
                best_encoding = encoding;
                best = candidate;
            }
        }
        best
    }
}
