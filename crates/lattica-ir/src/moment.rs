//! Moments of concurrent operations.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::operation::Operation;
use crate::qubit::GridQubit;

/// A set of operations acting in the same synchronized time step.
///
/// No two operations in a moment may address the same qubit; the
/// constructor rejects overlapping operand sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    operations: Vec<Operation>,
}

impl Moment {
    /// Create a moment from operations, checking operand disjointness.
    pub fn new(operations: impl IntoIterator<Item = Operation>) -> IrResult<Self> {
        let operations: Vec<_> = operations.into_iter().collect();
        let mut seen: FxHashSet<GridQubit> = FxHashSet::default();
        for op in &operations {
            for &qubit in &op.qubits {
                if !seen.insert(qubit) {
                    return Err(IrError::QubitConflict { qubit });
                }
            }
        }
        Ok(Self { operations })
    }

    /// Create an empty moment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The operations in this moment.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Check whether any operation in this moment addresses any of the
    /// given qubits.
    pub fn operates_on(&self, qubits: &[GridQubit]) -> bool {
        self.operations
            .iter()
            .any(|op| op.qubits.iter().any(|q| qubits.contains(q)))
    }

    /// The number of operations in this moment.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check whether this moment contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    #[test]
    fn test_disjoint_operations() {
        let moment = Moment::new([
            Operation::rotation(q(0, 0)),
            Operation::interaction(q(1, 0), q(1, 1)),
        ])
        .unwrap();
        assert_eq!(moment.len(), 2);
        assert!(moment.operates_on(&[q(1, 1)]));
        assert!(!moment.operates_on(&[q(2, 2)]));
    }

    #[test]
    fn test_overlapping_operations_rejected() {
        let err = Moment::new([
            Operation::rotation(q(0, 0)),
            Operation::interaction(q(0, 0), q(0, 1)),
        ])
        .unwrap_err();
        assert!(matches!(err, IrError::QubitConflict { qubit } if qubit == q(0, 0)));
    }

    #[test]
    fn test_empty() {
        let moment = Moment::empty();
        assert!(moment.is_empty());
        assert!(!moment.operates_on(&[q(0, 0)]));
    }
}
