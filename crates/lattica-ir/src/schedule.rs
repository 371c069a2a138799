//! Timed schedules of operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::duration::{Duration, Timestamp};
use crate::operation::Operation;

/// An operation placed at an absolute start time with an explicit duration.
///
/// The operation is active over the half-open interval
/// `[start, start + duration)`; a zero-duration operation is active at no
/// instant and overlaps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledOperation {
    /// The operation itself.
    pub operation: Operation,
    /// When the operation starts.
    pub start: Timestamp,
    /// How long the operation runs.
    pub duration: Duration,
}

impl ScheduledOperation {
    /// Create a scheduled operation.
    pub fn new(operation: Operation, start: Timestamp, duration: Duration) -> Self {
        Self {
            operation,
            start,
            duration,
        }
    }

    /// The first instant after the operation is no longer active.
    pub fn end(&self) -> Timestamp {
        self.start + self.duration
    }

    /// Check whether this operation's active interval intersects another's.
    pub fn overlaps(&self, other: &ScheduledOperation) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for ScheduledOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} for {}", self.operation, self.start, self.duration)
    }
}

/// A collection of scheduled operations.
///
/// The schedule assumes (and does not re-check) that no two members overlap
/// in time on the same qubit; callers construct schedules from an upstream
/// scheduler that maintains that invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    scheduled: Vec<ScheduledOperation>,
}

impl Schedule {
    /// Create a schedule from scheduled operations.
    pub fn new(scheduled: impl IntoIterator<Item = ScheduledOperation>) -> Self {
        Self {
            scheduled: scheduled.into_iter().collect(),
        }
    }

    /// Append a scheduled operation.
    pub fn push(&mut self, scheduled: ScheduledOperation) -> &mut Self {
        self.scheduled.push(scheduled);
        self
    }

    /// The scheduled operations, in insertion order.
    pub fn scheduled_operations(&self) -> &[ScheduledOperation] {
        &self.scheduled
    }

    /// Iterate over the underlying operations.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.scheduled.iter().map(|s| &s.operation)
    }

    /// All members whose active intervals intersect the target's.
    ///
    /// The target is excluded by identity, not equality: a member borrowed
    /// from this schedule is never reported as overlapping itself, while a
    /// proposed operation not yet inserted is checked against every member.
    pub fn overlapping<'a>(
        &'a self,
        target: &'a ScheduledOperation,
    ) -> impl Iterator<Item = &'a ScheduledOperation> {
        self.scheduled
            .iter()
            .filter(move |other| !std::ptr::eq(*other, target) && other.overlaps(target))
    }

    /// The number of scheduled operations.
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    /// Check whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::GridQubit;

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    fn at(op: Operation, start: u64, nanos: u64) -> ScheduledOperation {
        ScheduledOperation::new(op, Timestamp::nanos(start), Duration::nanos(nanos))
    }

    #[test]
    fn test_half_open_overlap() {
        let a = at(Operation::rotation(q(0, 0)), 0, 10);
        let b = at(Operation::rotation(q(0, 1)), 5, 10);
        let c = at(Operation::rotation(q(0, 2)), 10, 10);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Back-to-back operations share no instant.
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_zero_duration_overlaps_nothing() {
        let virt = at(Operation::virtual_phase(q(0, 0)), 5, 0);
        let long = at(Operation::rotation(q(0, 1)), 0, 10);
        assert!(!virt.overlaps(&long));
        assert!(!long.overlaps(&virt));
    }

    #[test]
    fn test_overlapping_excludes_self_by_identity() {
        let schedule = Schedule::new([
            at(Operation::rotation(q(0, 0)), 0, 10),
            at(Operation::rotation(q(0, 1)), 5, 10),
        ]);

        let first = &schedule.scheduled_operations()[0];
        let others: Vec<_> = schedule.overlapping(first).collect();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].operation.qubits, vec![q(0, 1)]);

        // A proposed operation outside the schedule is checked against
        // every member, including an identical-looking one.
        let proposed = at(Operation::rotation(q(0, 0)), 0, 10);
        assert_eq!(schedule.overlapping(&proposed).count(), 2);
    }
}
