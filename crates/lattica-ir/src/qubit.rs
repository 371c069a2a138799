//! Grid qubit addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A qubit identified by its (row, column) position on a 2D lattice.
///
/// Ordering is lexicographic by (row, col), which keeps row and column
/// listings deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridQubit {
    /// Row coordinate.
    pub row: i32,
    /// Column coordinate.
    pub col: i32,
}

impl GridQubit {
    /// Create a qubit at the given grid position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether another qubit is exactly one cardinal step away.
    ///
    /// Diagonal positions are never adjacent.
    pub fn is_adjacent(&self, other: &GridQubit) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// The four cardinal neighbor positions of this qubit.
    ///
    /// Positions are returned whether or not they exist on any particular
    /// device; membership is the topology's concern.
    pub fn neighbors(&self) -> [GridQubit; 4] {
        [
            GridQubit::new(self.row + 1, self.col),
            GridQubit::new(self.row - 1, self.col),
            GridQubit::new(self.row, self.col + 1),
            GridQubit::new(self.row, self.col - 1),
        ]
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for GridQubit {
    fn from((row, col): (i32, i32)) -> Self {
        GridQubit::new(row, col)
    }
}
