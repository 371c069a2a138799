//! Lattica Device Constraint Validation
//!
//! This crate checks already-constructed circuits and schedules against a
//! declared device: a fixed grid [`Topology`] of qubits, a native gate set,
//! and a gate-timing model. It answers three questions:
//!
//! 1. Is a single operation legal on this device (native gate, on-device
//!    operands, grid-local two-qubit interactions)?
//! 2. Do concurrently-active operations conflict under the crosstalk rule
//!    (two simultaneous interactions on adjacent qubits interfere)?
//! 3. What acquaintance size does an operation or strategy circuit
//!    exercise?
//!
//! Two device variants implement the shared [`Device`] capability trait:
//! [`GridDevice`] carries the timing model and the crosstalk rules, while
//! [`AcquaintanceDevice`] restricts circuits to acquaintance and
//! permutation gates and reports timing queries as unsupported.
//!
//! Everything here is a pure query over borrowed, immutable inputs; device
//! values are cheap to clone and safe to share across threads.
//!
//! # Example
//!
//! ```rust
//! use lattica_device::{Device, GridDevice, Topology};
//! use lattica_ir::{Duration, GridQubit, Moment, Operation};
//!
//! let device = GridDevice::new(
//!     Duration::micros(1),  // measurement
//!     Duration::nanos(20),  // rotation
//!     Duration::nanos(50),  // interaction
//!     Topology::rect(2, 2),
//! );
//!
//! let a = GridQubit::new(0, 0);
//! let b = GridQubit::new(0, 1);
//! device.validate_operation(&Operation::interaction(a, b)).unwrap();
//!
//! // Two interactions on the 2x2 grid always sit next to each other.
//! let moment = Moment::new([
//!     Operation::interaction(a, b),
//!     Operation::interaction(GridQubit::new(1, 0), GridQubit::new(1, 1)),
//! ])
//! .unwrap();
//! assert!(device.validate_moment(&moment).is_err());
//! ```

pub mod acquaintance;
pub mod device;
mod diagram;
pub mod error;
pub mod grid;
pub mod topology;

pub use acquaintance::{
    AcquaintanceDevice, acquaintance_size, is_acquaintance_strategy, operation_acquaintance_size,
};
pub use device::{Device, verify_unique_measurement_keys};
pub use error::{DeviceError, DeviceResult};
pub use grid::GridDevice;
pub use topology::Topology;
