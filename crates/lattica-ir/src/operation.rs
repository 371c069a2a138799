//! Operations combining gate kinds with grid operands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::GateKind;
use crate::qubit::GridQubit;

/// The kind of operation in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationKind {
    /// A gate applied to the operands.
    Gate(GateKind),
    /// Synchronization marker with no gate semantics.
    Barrier,
}

/// A complete operation: a kind plus its ordered operand qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The kind of operation.
    pub kind: OperationKind,
    /// Qubits this operation addresses, in order.
    pub qubits: Vec<GridQubit>,
}

impl Operation {
    /// Create a gate operation.
    pub fn gate(kind: GateKind, qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self {
            kind: OperationKind::Gate(kind),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a two-qubit entangling interaction.
    pub fn interaction(a: GridQubit, b: GridQubit) -> Self {
        Self::gate(GateKind::Interaction, [a, b])
    }

    /// Create a single-qubit rotation.
    pub fn rotation(qubit: GridQubit) -> Self {
        Self::gate(GateKind::Rotation, [qubit])
    }

    /// Create a phased single-qubit rotation.
    pub fn phased_rotation(qubit: GridQubit) -> Self {
        Self::gate(GateKind::PhasedRotation, [qubit])
    }

    /// Create a measurement tagged with a result key.
    pub fn measurement(
        key: impl Into<String>,
        qubits: impl IntoIterator<Item = GridQubit>,
    ) -> Self {
        Self::gate(GateKind::Measurement { key: key.into() }, qubits)
    }

    /// Create a virtual phase rotation.
    pub fn virtual_phase(qubit: GridQubit) -> Self {
        Self::gate(GateKind::VirtualPhase, [qubit])
    }

    /// Create an acquaintance opportunity across the given qubits.
    pub fn acquaintance(qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self::gate(GateKind::Acquaintance, qubits)
    }

    /// Create a barrier across the given qubits.
    pub fn barrier(qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self {
            kind: OperationKind::Barrier,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Get the gate kind if this is a gate operation.
    pub fn gate_kind(&self) -> Option<&GateKind> {
        match &self.kind {
            OperationKind::Gate(kind) => Some(kind),
            OperationKind::Barrier => None,
        }
    }

    /// Check if this is a gate operation.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, OperationKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self.kind, OperationKind::Gate(GateKind::Measurement { .. }))
    }

    /// Get the measurement key if this is a measurement.
    pub fn measurement_key(&self) -> Option<&str> {
        match &self.kind {
            OperationKind::Gate(GateKind::Measurement { key }) => Some(key),
            _ => None,
        }
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &str {
        match &self.kind {
            OperationKind::Gate(kind) => kind.name(),
            OperationKind::Barrier => "barrier",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{q}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    #[test]
    fn test_interaction() {
        let op = Operation::interaction(q(0, 0), q(0, 1));
        assert!(op.is_gate());
        assert!(!op.is_measurement());
        assert_eq!(op.qubits.len(), 2);
        assert_eq!(op.name(), "interaction");
    }

    #[test]
    fn test_measurement_key() {
        let op = Operation::measurement("m0", [q(0, 0)]);
        assert!(op.is_measurement());
        assert_eq!(op.measurement_key(), Some("m0"));

        let rot = Operation::rotation(q(0, 0));
        assert_eq!(rot.measurement_key(), None);
    }

    #[test]
    fn test_barrier_has_no_gate() {
        let op = Operation::barrier([q(0, 0), q(0, 1)]);
        assert!(!op.is_gate());
        assert!(op.gate_kind().is_none());
        assert_eq!(op.name(), "barrier");
    }

    #[test]
    fn test_display() {
        let op = Operation::interaction(q(0, 0), q(0, 1));
        assert_eq!(format!("{op}"), "interaction((0, 0), (0, 1))");
    }
}
