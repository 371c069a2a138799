//! The acquaintance-strategy device and size classifier.

use lattica_ir::{
    Circuit, DeviceClass, Duration, GateKind, Operation, Schedule, ScheduledOperation,
};
use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::{DeviceError, DeviceResult};

/// A device that contains only acquaintance and permutation gates.
///
/// Acquaintance strategies describe qubit reordering, not physical
/// execution, so the device has no timing model: every schedule-related
/// capability reports [`DeviceError::NotSupported`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquaintanceDevice;

impl AcquaintanceDevice {
    /// Create an empty circuit tagged as an acquaintance strategy.
    pub fn strategy(name: impl Into<String>) -> Circuit {
        Circuit::for_device(name, DeviceClass::Acquaintance)
    }
}

impl Device for AcquaintanceDevice {
    fn validate_operation(&self, operation: &Operation) -> DeviceResult<()> {
        let Some(kind) = operation.gate_kind() else {
            return Err(DeviceError::UnsupportedOperation(operation.to_string()));
        };
        if operation.qubits.is_empty() {
            return Err(DeviceError::UnsupportedOperation(operation.to_string()));
        }
        match kind {
            GateKind::Acquaintance | GateKind::Permutation { .. } => Ok(()),
            other => Err(DeviceError::UnsupportedGate(other.name().to_owned())),
        }
    }

    fn duration_of(&self, _operation: &Operation) -> DeviceResult<Duration> {
        Err(DeviceError::NotSupported("duration_of"))
    }

    fn validate_scheduled_operation(
        &self,
        _schedule: &Schedule,
        _scheduled: &ScheduledOperation,
    ) -> DeviceResult<()> {
        Err(DeviceError::NotSupported("validate_scheduled_operation"))
    }

    fn validate_schedule(&self, _schedule: &Schedule) -> DeviceResult<()> {
        Err(DeviceError::NotSupported("validate_schedule"))
    }
}

/// Check whether a circuit was constructed as an acquaintance strategy.
pub fn is_acquaintance_strategy(circuit: &Circuit) -> bool {
    circuit.device_class() == DeviceClass::Acquaintance
}

/// The maximum number of qubits an operation acquaints with each other.
///
/// Operations without a gate, and gate kinds without acquaintance
/// semantics, have size 0.
pub fn operation_acquaintance_size(operation: &Operation) -> usize {
    let Some(kind) = operation.gate_kind() else {
        return 0;
    };
    match kind {
        GateKind::Acquaintance => operation.qubits.len(),
        GateKind::BipartiteSwap { .. } => 2,
        GateKind::ShiftSwap(gate) => gate.acquaintance_size(),
        GateKind::SwapNetwork(gate) => match gate.acquaintance_size {
            // No target declared: the two largest parts meet.
            None => {
                let mut lens = gate.part_lens.clone();
                lens.sort_unstable();
                lens.iter().rev().take(2).sum()
            }
            Some(size) if size.checked_sub(1).is_some_and(|n| gate.part_lens.contains(&n)) => size,
            // A declared size whose predecessor is not among the part
            // lengths defers to the per-gate sizer capability, which swap
            // networks do not carry.
            Some(_) => 0,
        },
        GateKind::Custom(custom) => custom
            .acquaintance_sizer
            .map_or(0, |sizer| sizer(operation.qubits.len())),
        _ => 0,
    }
}

/// The maximum acquaintance size over all operations of a strategy circuit.
///
/// Fails with [`DeviceError::NotAcquaintanceStrategy`] when the circuit was
/// not constructed against the acquaintance device; an empty strategy has
/// size 0.
pub fn acquaintance_size(circuit: &Circuit) -> DeviceResult<usize> {
    if !is_acquaintance_strategy(circuit) {
        return Err(DeviceError::NotAcquaintanceStrategy(
            circuit.name().to_owned(),
        ));
    }
    Ok(circuit
        .all_operations()
        .map(operation_acquaintance_size)
        .max()
        .unwrap_or(0))
}
