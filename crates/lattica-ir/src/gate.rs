//! Gate kinds recognized by lattica devices.

use serde::{Deserialize, Serialize};

/// The closed set of gate variants the validation layer understands.
///
/// Gates are classified by family, not by parameter values: a device either
/// supports a family natively or it does not, and crosstalk and timing rules
/// apply uniformly within a family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Two-qubit entangling interaction (CZ family).
    Interaction,
    /// Single-qubit rotation about an equatorial axis.
    Rotation,
    /// Phase-parameterized single-qubit rotation.
    PhasedRotation,
    /// Computational-basis measurement tagged with a result key.
    Measurement {
        /// Identifier for the measurement result.
        key: String,
    },
    /// Phase rotation performed in control software; takes no device time.
    VirtualPhase,
    /// Relabeling of the operand qubits.
    Permutation {
        /// Image of each operand index under the permutation.
        permutation: Vec<usize>,
    },
    /// Acquaints all operands with each other.
    Acquaintance,
    /// Swap network acquainting qubits across two halves pairwise.
    BipartiteSwap {
        /// Number of qubits on each side of the partition.
        part_size: usize,
    },
    /// Swap network shifting two groups of parts past each other.
    ShiftSwap(ShiftSwapGate),
    /// Swap network over contiguous parts.
    SwapNetwork(SwapNetworkGate),
    /// A gate unknown to the validation layer.
    Custom(CustomGate),
}

impl GateKind {
    /// Get the name of this gate kind.
    pub fn name(&self) -> &str {
        match self {
            GateKind::Interaction => "interaction",
            GateKind::Rotation => "rotation",
            GateKind::PhasedRotation => "phased_rotation",
            GateKind::Measurement { .. } => "measure",
            GateKind::VirtualPhase => "virtual_phase",
            GateKind::Permutation { .. } => "permutation",
            GateKind::Acquaintance => "acquaint",
            GateKind::BipartiteSwap { .. } => "bipartite_swap",
            GateKind::ShiftSwap(_) => "shift_swap",
            GateKind::SwapNetwork(_) => "swap_network",
            GateKind::Custom(g) => &g.name,
        }
    }
}

/// A swap network that shifts a left group of parts past a right group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSwapGate {
    /// Part lengths of the left group.
    pub left_part_lens: Vec<usize>,
    /// Part lengths of the right group.
    pub right_part_lens: Vec<usize>,
}

impl ShiftSwapGate {
    /// Create a shift swap network over the given part lengths.
    pub fn new(
        left_part_lens: impl IntoIterator<Item = usize>,
        right_part_lens: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            left_part_lens: left_part_lens.into_iter().collect(),
            right_part_lens: right_part_lens.into_iter().collect(),
        }
    }

    /// The acquaintance size this gate declares for itself: the largest
    /// left part meeting the largest right part.
    pub fn acquaintance_size(&self) -> usize {
        let left = self.left_part_lens.iter().copied().max().unwrap_or(0);
        let right = self.right_part_lens.iter().copied().max().unwrap_or(0);
        left + right
    }

    /// Total number of qubits the network spans.
    pub fn num_qubits(&self) -> usize {
        self.left_part_lens.iter().sum::<usize>() + self.right_part_lens.iter().sum::<usize>()
    }
}

/// A swap network over contiguous parts of the operand line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapNetworkGate {
    /// Lengths of the contiguous parts.
    pub part_lens: Vec<usize>,
    /// The acquaintance size the network targets, if any.
    pub acquaintance_size: Option<usize>,
}

impl SwapNetworkGate {
    /// Create a swap network over the given part lengths.
    pub fn new(
        part_lens: impl IntoIterator<Item = usize>,
        acquaintance_size: Option<usize>,
    ) -> Self {
        Self {
            part_lens: part_lens.into_iter().collect(),
            acquaintance_size,
        }
    }

    /// Total number of qubits the network spans.
    pub fn num_qubits(&self) -> usize {
        self.part_lens.iter().sum()
    }
}

/// A gate outside the recognized families.
///
/// Custom gates participate in acquaintance classification only through the
/// optional `acquaintance_sizer` capability, which maps an operand count to
/// an acquaintance size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    /// The name of the gate.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: usize,
    /// Optional capability: acquaintance size as a function of operand
    /// count. Not serialized; deserialized gates carry no sizer.
    #[serde(skip)]
    pub acquaintance_sizer: Option<fn(usize) -> usize>,
}

impl CustomGate {
    /// Create a new custom gate.
    pub fn new(name: impl Into<String>, num_qubits: usize) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            acquaintance_sizer: None,
        }
    }

    /// Declare the acquaintance-size capability.
    #[must_use]
    pub fn with_acquaintance_sizer(mut self, sizer: fn(usize) -> usize) -> Self {
        self.acquaintance_sizer = Some(sizer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(GateKind::Interaction.name(), "interaction");
        assert_eq!(
            GateKind::Measurement { key: "m0".into() }.name(),
            "measure"
        );
        assert_eq!(GateKind::Custom(CustomGate::new("mygate", 3)).name(), "mygate");
    }

    #[test]
    fn test_shift_swap_declared_size() {
        let gate = ShiftSwapGate::new([1, 2], [3, 1]);
        assert_eq!(gate.acquaintance_size(), 5);
        assert_eq!(gate.num_qubits(), 7);
    }

    #[test]
    fn test_swap_network_qubit_count() {
        let gate = SwapNetworkGate::new([2, 2, 1], None);
        assert_eq!(gate.num_qubits(), 5);
        assert_eq!(gate.acquaintance_size, None);
    }

    #[test]
    fn test_custom_gate_sizer_not_serialized() {
        let gate = GateKind::Custom(CustomGate::new("mygate", 2).with_acquaintance_sizer(|n| n));
        let json = serde_json::to_string(&gate).unwrap();
        let back: GateKind = serde_json::from_str(&json).unwrap();
        match back {
            GateKind::Custom(custom) => assert!(custom.acquaintance_sizer.is_none()),
            _ => panic!("expected custom gate"),
        }
    }

    #[test]
    fn test_custom_gate_sizer() {
        let plain = CustomGate::new("mygate", 2);
        assert!(plain.acquaintance_sizer.is_none());

        let sized = CustomGate::new("mygate", 2).with_acquaintance_sizer(|n| n + 1);
        let sizer = sized.acquaintance_sizer.unwrap();
        assert_eq!(sizer(2), 3);
    }
}
