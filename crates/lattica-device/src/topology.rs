//! Device qubit topology.

use lattica_ir::GridQubit;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The fixed, finite set of qubit sites a device exposes.
///
/// The topology is immutable after construction. Adjacency is the four
/// cardinal grid neighbors; diagonal sites are never adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    qubits: FxHashSet<GridQubit>,
}

impl Topology {
    /// Create a topology from qubit positions. Duplicates collapse.
    pub fn new(qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self {
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a full rectangular grid with rows `0..rows` and columns
    /// `0..cols`.
    pub fn rect(rows: i32, cols: i32) -> Self {
        let mut qubits = FxHashSet::default();
        for row in 0..rows {
            for col in 0..cols {
                qubits.insert(GridQubit::new(row, col));
            }
        }
        Self { qubits }
    }

    /// Check whether a qubit is on the device.
    #[inline]
    pub fn contains(&self, qubit: &GridQubit) -> bool {
        self.qubits.contains(qubit)
    }

    /// The qubit at the given position, if the device has one.
    pub fn at(&self, row: i32, col: i32) -> Option<GridQubit> {
        let qubit = GridQubit::new(row, col);
        self.qubits.contains(&qubit).then_some(qubit)
    }

    /// The members adjacent to the given qubit: up to four cardinal
    /// neighbors, never the qubit itself or a diagonal site.
    pub fn neighbors_of(&self, qubit: &GridQubit) -> Vec<GridQubit> {
        qubit
            .neighbors()
            .into_iter()
            .filter(|n| self.qubits.contains(n))
            .collect()
    }

    /// The qubits in the given row, ascending by column.
    pub fn row(&self, row: i32) -> Vec<GridQubit> {
        let mut qubits: Vec<_> = self.qubits.iter().filter(|q| q.row == row).copied().collect();
        qubits.sort();
        qubits
    }

    /// The qubits in the given column, ascending by row.
    pub fn col(&self, col: i32) -> Vec<GridQubit> {
        let mut qubits: Vec<_> = self.qubits.iter().filter(|q| q.col == col).copied().collect();
        qubits.sort();
        qubits
    }

    /// Iterate over the qubits in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &GridQubit> {
        self.qubits.iter()
    }

    /// All qubits in (row, col) order.
    pub fn sorted(&self) -> Vec<GridQubit> {
        let mut qubits: Vec<_> = self.qubits.iter().copied().collect();
        qubits.sort();
        qubits
    }

    /// The number of qubits.
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Check whether the topology has no qubits.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }
}

impl FromIterator<GridQubit> for Topology {
    fn from_iter<I: IntoIterator<Item = GridQubit>>(iter: I) -> Self {
        Self::new(iter)
    }
}
