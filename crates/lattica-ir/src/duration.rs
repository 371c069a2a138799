//! Time values for scheduled execution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative span of device time, in nanoseconds.
///
/// `Duration::ZERO` is a valid value and is used for operations performed
/// entirely in control software.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Duration(u64);

impl Duration {
    /// The zero duration.
    pub const ZERO: Duration = Duration(0);

    /// Create a duration from nanoseconds.
    pub const fn nanos(ns: u64) -> Self {
        Duration(ns)
    }

    /// Create a duration from microseconds.
    pub const fn micros(us: u64) -> Self {
        Duration(us * 1_000)
    }

    /// Create a duration from milliseconds.
    pub const fn millis(ms: u64) -> Self {
        Duration(ms * 1_000_000)
    }

    /// The duration in nanoseconds.
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Check whether this duration is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ns", self.0)
    }
}

/// An absolute point in schedule time, in nanoseconds from the schedule
/// origin.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The schedule origin.
    pub const ZERO: Timestamp = Timestamp(0);

    /// Create a timestamp from nanoseconds.
    pub const fn nanos(ns: u64) -> Self {
        Timestamp(ns)
    }

    /// The timestamp in nanoseconds.
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 + rhs.as_nanos())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={} ns", self.0)
    }
}
