//! Integration tests for device constraint validation.
//!
//! These tests exercise the whole validation surface end-to-end: single
//! operations, moments with crosstalk, circuits with measurement-key
//! scopes, and timed schedules.

use lattica_device::{
    AcquaintanceDevice, Device, DeviceError, GridDevice, Topology, acquaintance_size,
};
use lattica_ir::{
    Circuit, Duration, GridQubit, Moment, Operation, Schedule, ScheduledOperation, Timestamp,
};

fn q(row: i32, col: i32) -> GridQubit {
    GridQubit::new(row, col)
}

/// Helper: the standard test device on a rows x cols grid.
fn device(rows: i32, cols: i32) -> GridDevice {
    GridDevice::new(
        Duration::micros(1),
        Duration::nanos(20),
        Duration::nanos(50),
        Topology::rect(rows, cols),
    )
}

/// Helper: schedule an operation at a start time with the device's own
/// duration for it.
fn schedule_op(device: &GridDevice, operation: Operation, start: u64) -> ScheduledOperation {
    let duration = device.duration_of(&operation).unwrap();
    ScheduledOperation::new(operation, Timestamp::nanos(start), duration)
}

// ============================================================================
// Moment-level crosstalk
// ============================================================================

#[test]
fn two_by_two_interactions_conflict() {
    // Topology {(0,0), (0,1), (1,0), (1,1)}: the two horizontal pairs are
    // vertically adjacent site by site, so they cannot run together.
    let device = device(2, 2);
    let moment = Moment::new([
        Operation::interaction(q(0, 0), q(0, 1)),
        Operation::interaction(q(1, 0), q(1, 1)),
    ])
    .unwrap();

    let err = device.validate_moment(&moment).unwrap_err();
    assert!(matches!(err, DeviceError::AdjacentInteraction { .. }));
}

#[test]
fn two_by_two_rotations_coexist() {
    let device = device(2, 2);
    let moment = Moment::new([
        Operation::rotation(q(0, 0)),
        Operation::rotation(q(0, 1)),
        Operation::rotation(q(1, 0)),
        Operation::rotation(q(1, 1)),
    ])
    .unwrap();

    device.validate_moment(&moment).unwrap();
}

#[test]
fn disjoint_non_adjacent_interactions_coexist() {
    let device = device(3, 3);
    let moment = Moment::new([
        Operation::interaction(q(0, 0), q(0, 1)),
        Operation::interaction(q(2, 1), q(2, 2)),
    ])
    .unwrap();

    device.validate_moment(&moment).unwrap();
}

// ============================================================================
// Operation-level constraints
// ============================================================================

#[test]
fn adjacent_interaction_valid_until_moved_apart() {
    let device = device(3, 3);

    device
        .validate_operation(&Operation::interaction(q(1, 1), q(1, 2)))
        .unwrap();

    // Same gate with one operand moved to a non-adjacent on-device site.
    let err = device
        .validate_operation(&Operation::interaction(q(1, 1), q(2, 2)))
        .unwrap_err();
    assert!(matches!(err, DeviceError::NonLocalInteraction(_)));
}

#[test]
fn off_device_operand_fails_regardless_of_kind() {
    let device = device(2, 2);

    for op in [
        Operation::rotation(q(4, 4)),
        Operation::measurement("m", [q(4, 4)]),
        Operation::interaction(q(0, 0), q(0, -1)),
    ] {
        let err = device.validate_operation(&op).unwrap_err();
        assert!(matches!(err, DeviceError::QubitNotOnDevice(_)), "{op}");
    }
}

// ============================================================================
// Circuit-level measurement keys
// ============================================================================

#[test]
fn duplicate_measurement_keys_fail_circuit_validation() {
    let device = device(2, 2);

    let mut circuit = Circuit::new("dup");
    circuit.push(Moment::new([Operation::measurement("result", [q(0, 0)])]).unwrap());
    circuit.push(Moment::new([Operation::measurement("result", [q(0, 1)])]).unwrap());

    let err = device.validate_circuit(&circuit).unwrap_err();
    assert!(matches!(err, DeviceError::DuplicateMeasurementKey(key) if key == "result"));

    // Renaming either key makes the same circuit pass.
    let mut renamed = Circuit::new("ok");
    renamed.push(Moment::new([Operation::measurement("result", [q(0, 0)])]).unwrap());
    renamed.push(Moment::new([Operation::measurement("result2", [q(0, 1)])]).unwrap());
    device.validate_circuit(&renamed).unwrap();
}

#[test]
fn circuit_validation_covers_every_moment() {
    let device = device(2, 2);

    let mut circuit = Circuit::new("bad_tail");
    circuit.push(Moment::new([Operation::rotation(q(0, 0))]).unwrap());
    circuit.push(Moment::new([Operation::interaction(q(0, 0), q(1, 1))]).unwrap());

    let err = device.validate_circuit(&circuit).unwrap_err();
    assert!(matches!(err, DeviceError::NonLocalInteraction(_)));
}

// ============================================================================
// Schedule-level crosstalk and keys
// ============================================================================

#[test]
fn overlapping_adjacent_interactions_fail_schedule_validation() {
    let device = device(2, 2);
    let schedule = Schedule::new([
        schedule_op(&device, Operation::interaction(q(0, 0), q(0, 1)), 0),
        schedule_op(&device, Operation::interaction(q(1, 0), q(1, 1)), 25),
    ]);

    let err = device.validate_schedule(&schedule).unwrap_err();
    assert!(matches!(err, DeviceError::AdjacentInteraction { .. }));
}

#[test]
fn sequential_adjacent_interactions_pass_schedule_validation() {
    let device = device(2, 2);
    // Same pairs, but back to back in time: intervals are half-open, so
    // they share no instant.
    let schedule = Schedule::new([
        schedule_op(&device, Operation::interaction(q(0, 0), q(0, 1)), 0),
        schedule_op(&device, Operation::interaction(q(1, 0), q(1, 1)), 50),
    ]);

    device.validate_schedule(&schedule).unwrap();
}

#[test]
fn overlapping_rotation_does_not_conflict_with_interaction() {
    let device = device(2, 2);
    let schedule = Schedule::new([
        schedule_op(&device, Operation::interaction(q(0, 0), q(0, 1)), 0),
        schedule_op(&device, Operation::rotation(q(1, 0)), 10),
    ]);

    device.validate_schedule(&schedule).unwrap();
}

#[test]
fn duplicate_keys_fail_schedule_validation() {
    let device = device(2, 2);
    let schedule = Schedule::new([
        schedule_op(&device, Operation::measurement("m", [q(0, 0)]), 0),
        schedule_op(&device, Operation::measurement("m", [q(0, 1)]), 5_000),
    ]);

    let err = device.validate_schedule(&schedule).unwrap_err();
    assert!(matches!(err, DeviceError::DuplicateMeasurementKey(_)));
}

#[test]
fn proposed_scheduled_operation_checked_against_members() {
    let device = device(2, 2);
    let schedule = Schedule::new([schedule_op(
        &device,
        Operation::interaction(q(0, 0), q(0, 1)),
        0,
    )]);

    // Not yet a member of the schedule, but temporally overlapping.
    let proposed = schedule_op(&device, Operation::interaction(q(1, 0), q(1, 1)), 10);
    let err = device
        .validate_scheduled_operation(&schedule, &proposed)
        .unwrap_err();
    assert!(matches!(err, DeviceError::AdjacentInteraction { .. }));
}

// ============================================================================
// Acquaintance strategies
// ============================================================================

#[test]
fn acquaintance_size_of_strategy_circuit() {
    let mut strategy = AcquaintanceDevice::strategy("s");
    strategy.push(Moment::new([Operation::acquaintance([q(0, 0), q(0, 1)])]).unwrap());
    strategy
        .push(Moment::new([Operation::acquaintance([q(0, 0), q(0, 1), q(0, 2)])]).unwrap());

    assert_eq!(acquaintance_size(&strategy).unwrap(), 3);
}

#[test]
fn acquaintance_size_rejects_plain_circuits() {
    let circuit = Circuit::new("plain");
    let err = acquaintance_size(&circuit).unwrap_err();
    assert!(matches!(err, DeviceError::NotAcquaintanceStrategy(_)));
}

// ============================================================================
// Rendering and value semantics
// ============================================================================

#[test]
fn device_diagram_shows_qubits_and_edges() {
    let device = device(2, 3);
    let diagram = device.to_string();

    assert!(diagram.contains("(0, 0)───(0, 1)"));
    assert!(diagram.contains('│'));
    assert_eq!(diagram.lines().count(), 3);
}

#[test]
fn devices_compare_by_value() {
    assert_eq!(device(2, 2), device(2, 2));
    assert_ne!(device(2, 2), device(3, 3));

    let other_timing = GridDevice::new(
        Duration::micros(2),
        Duration::nanos(20),
        Duration::nanos(50),
        Topology::rect(2, 2),
    );
    assert_ne!(device(2, 2), other_timing);
}

#[test]
fn device_serde_roundtrip() {
    let device = device(2, 2);
    let json = serde_json::to_string(&device).unwrap();
    let back: GridDevice = serde_json::from_str(&json).unwrap();
    assert_eq!(device, back);
}
