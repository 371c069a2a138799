//! The timed grid device.

use std::fmt;

use lattica_ir::{
    Circuit, Duration, GateKind, GridQubit, Moment, Operation, Schedule, ScheduledOperation,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::device::{Device, verify_unique_measurement_keys};
use crate::diagram;
use crate::error::{DeviceError, DeviceResult};
use crate::topology::Topology;

/// A device with qubits placed in a grid. Neighboring qubits can interact.
///
/// The device is an immutable value: the topology and the three configured
/// durations are fixed at construction, and equality is structural over
/// them. Validation borrows circuits and schedules read-only, so one device
/// value can serve any number of concurrent validation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDevice {
    measurement_duration: Duration,
    rotation_duration: Duration,
    interaction_duration: Duration,
    topology: Topology,
}

impl GridDevice {
    /// Create a grid device from its timing model and topology.
    pub fn new(
        measurement_duration: Duration,
        rotation_duration: Duration,
        interaction_duration: Duration,
        topology: Topology,
    ) -> Self {
        Self {
            measurement_duration,
            rotation_duration,
            interaction_duration,
            topology,
        }
    }

    /// The device's qubit topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The qubits adjacent to the given qubit on this device.
    pub fn neighbors_of(&self, qubit: &GridQubit) -> Vec<GridQubit> {
        self.topology.neighbors_of(qubit)
    }

    /// The qubit at the given position, if the device has one.
    pub fn at(&self, row: i32, col: i32) -> Option<GridQubit> {
        self.topology.at(row, col)
    }

    /// The qubits in the given row, ascending by column.
    pub fn row(&self, row: i32) -> Vec<GridQubit> {
        self.topology.row(row)
    }

    /// The qubits in the given column, ascending by row.
    pub fn col(&self, col: i32) -> Vec<GridQubit> {
        self.topology.col(col)
    }

    /// Check a gate kind against the device's native set.
    pub fn validate_gate(&self, kind: &GateKind) -> DeviceResult<()> {
        match kind {
            GateKind::Interaction
            | GateKind::Rotation
            | GateKind::PhasedRotation
            | GateKind::Measurement { .. }
            | GateKind::VirtualPhase => Ok(()),
            other => Err(DeviceError::UnsupportedGate(other.name().to_owned())),
        }
    }

    /// Gate kinds that never participate in crosstalk, no matter where
    /// their operands sit.
    fn is_crosstalk_exempt(kind: &GateKind) -> bool {
        matches!(
            kind,
            GateKind::Rotation
                | GateKind::PhasedRotation
                | GateKind::Measurement { .. }
                | GateKind::VirtualPhase
        )
    }

    /// Check whether a concurrently-active pair conflicts: `interaction`
    /// must be a two-qubit interaction, and the pair conflicts when any
    /// operand of one is grid-adjacent to any operand of the other.
    fn interaction_conflicts_with(interaction: &Operation, other: &Operation) -> bool {
        if let Some(kind) = other.gate_kind() {
            if Self::is_crosstalk_exempt(kind) {
                return false;
            }
        }
        interaction
            .qubits
            .iter()
            .any(|q| other.qubits.iter().any(|p| q.is_adjacent(p)))
    }

    fn interaction_conflicts_with_any<'a>(
        interaction: &Operation,
        others: impl IntoIterator<Item = &'a Operation>,
    ) -> bool {
        others
            .into_iter()
            .any(|other| Self::interaction_conflicts_with(interaction, other))
    }
}

impl Device for GridDevice {
    fn validate_operation(&self, operation: &Operation) -> DeviceResult<()> {
        let Some(kind) = operation.gate_kind() else {
            return Err(DeviceError::UnsupportedOperation(operation.to_string()));
        };
        if operation.qubits.is_empty() {
            return Err(DeviceError::UnsupportedOperation(operation.to_string()));
        }

        self.validate_gate(kind)?;

        for qubit in &operation.qubits {
            if !self.topology.contains(qubit) {
                return Err(DeviceError::QubitNotOnDevice(*qubit));
            }
        }

        if operation.qubits.len() == 2 && !operation.is_measurement() {
            let (p, q) = (&operation.qubits[0], &operation.qubits[1]);
            if !p.is_adjacent(q) {
                return Err(DeviceError::NonLocalInteraction(operation.to_string()));
            }
        }

        Ok(())
    }

    fn duration_of(&self, operation: &Operation) -> DeviceResult<Duration> {
        let Some(kind) = operation.gate_kind() else {
            return Err(DeviceError::UnsupportedOperation(operation.to_string()));
        };
        match kind {
            GateKind::Interaction => Ok(self.interaction_duration),
            GateKind::Measurement { .. } => Ok(self.measurement_duration),
            GateKind::Rotation | GateKind::PhasedRotation => Ok(self.rotation_duration),
            // Virtual phases are applied in the control software.
            GateKind::VirtualPhase => Ok(Duration::ZERO),
            other => Err(DeviceError::UnsupportedGate(other.name().to_owned())),
        }
    }

    fn validate_moment(&self, moment: &Moment) -> DeviceResult<()> {
        for operation in moment.operations() {
            self.validate_operation(operation)?;
        }
        for operation in moment.operations() {
            if matches!(operation.gate_kind(), Some(GateKind::Interaction)) {
                for other in moment.operations() {
                    if std::ptr::eq(operation, other) {
                        continue;
                    }
                    if Self::interaction_conflicts_with(operation, other) {
                        return Err(DeviceError::AdjacentInteraction {
                            first: operation.to_string(),
                            second: other.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_circuit(&self, circuit: &Circuit) -> DeviceResult<()> {
        debug!(
            circuit = circuit.name(),
            moments = circuit.num_moments(),
            "validating circuit"
        );
        for moment in circuit.moments() {
            self.validate_moment(moment)?;
        }
        verify_unique_measurement_keys(circuit.all_operations())
    }

    fn can_add_operation_into_moment(&self, operation: &Operation, moment: &Moment) -> bool {
        if self.validate_moment(moment).is_err() {
            return false;
        }
        if self.validate_operation(operation).is_err() || moment.operates_on(&operation.qubits) {
            return false;
        }
        if matches!(operation.gate_kind(), Some(GateKind::Interaction)) {
            return !Self::interaction_conflicts_with_any(operation, moment.operations());
        }
        true
    }

    fn validate_scheduled_operation(
        &self,
        schedule: &Schedule,
        scheduled: &ScheduledOperation,
    ) -> DeviceResult<()> {
        self.validate_operation(&scheduled.operation)?;

        if matches!(scheduled.operation.gate_kind(), Some(GateKind::Interaction)) {
            for other in schedule.overlapping(scheduled) {
                if Self::interaction_conflicts_with(&scheduled.operation, &other.operation) {
                    return Err(DeviceError::AdjacentInteraction {
                        first: scheduled.to_string(),
                        second: other.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_schedule(&self, schedule: &Schedule) -> DeviceResult<()> {
        debug!(operations = schedule.len(), "validating schedule");
        verify_unique_measurement_keys(schedule.operations())?;
        for scheduled in schedule.scheduled_operations() {
            self.validate_scheduled_operation(schedule, scheduled)?;
        }
        Ok(())
    }
}

impl fmt::Display for GridDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        diagram::write_grid(&self.topology, f)
    }
}
