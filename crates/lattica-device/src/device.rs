//! The shared device capability interface.

use lattica_ir::{Circuit, Duration, Moment, Operation, Schedule, ScheduledOperation};
use rustc_hash::FxHashSet;

use crate::error::{DeviceError, DeviceResult};

/// Capabilities common to all device variants.
///
/// Defaults validate a moment by validating each operation and a circuit by
/// validating each moment; variants layer their own whole-scope rules on
/// top. A variant without a timing model reports
/// [`DeviceError::NotSupported`] from the schedule-related methods instead
/// of panicking.
pub trait Device {
    /// Check a single operation against this device's constraints.
    fn validate_operation(&self, operation: &Operation) -> DeviceResult<()>;

    /// The time cost of an operation on this device.
    fn duration_of(&self, operation: &Operation) -> DeviceResult<Duration>;

    /// Check every operation in a moment.
    fn validate_moment(&self, moment: &Moment) -> DeviceResult<()> {
        for operation in moment.operations() {
            self.validate_operation(operation)?;
        }
        Ok(())
    }

    /// Check every moment in a circuit.
    fn validate_circuit(&self, circuit: &Circuit) -> DeviceResult<()> {
        for moment in circuit.moments() {
            self.validate_moment(moment)?;
        }
        Ok(())
    }

    /// Check whether an operation could join a moment without violating
    /// device constraints. Never mutates the moment.
    fn can_add_operation_into_moment(&self, operation: &Operation, moment: &Moment) -> bool {
        self.validate_operation(operation).is_ok() && !moment.operates_on(&operation.qubits)
    }

    /// Check one scheduled operation against the rest of its schedule.
    fn validate_scheduled_operation(
        &self,
        schedule: &Schedule,
        scheduled: &ScheduledOperation,
    ) -> DeviceResult<()>;

    /// Check a whole schedule.
    fn validate_schedule(&self, schedule: &Schedule) -> DeviceResult<()>;
}

/// Fail on the first measurement key that appears twice.
///
/// The scan is sequential, so the reported key is deterministic for a
/// deterministic operation order.
pub fn verify_unique_measurement_keys<'a>(
    operations: impl IntoIterator<Item = &'a Operation>,
) -> DeviceResult<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for operation in operations {
        if let Some(key) = operation.measurement_key() {
            if !seen.insert(key) {
                return Err(DeviceError::DuplicateMeasurementKey(key.to_owned()));
            }
        }
    }
    Ok(())
}
