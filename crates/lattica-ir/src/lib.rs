//! Lattica Circuit Intermediate Representation
//!
//! This crate provides the data structures consumed by the lattica device
//! validators: grid-addressed qubits, the closed family of gate kinds,
//! operations, moments, circuits, and timed schedules.
//!
//! # Core Components
//!
//! - **Qubits**: [`GridQubit`] addresses a site on a 2D lattice by
//!   (row, col); adjacency is the four cardinal neighbors.
//! - **Gates**: [`GateKind`] is the closed variant family the validation
//!   layer understands, with [`CustomGate`] as the single extension point.
//! - **Operations**: [`Operation`] pairs an [`OperationKind`] with its
//!   ordered operand qubits.
//! - **Moments**: [`Moment`] holds operand-disjoint concurrent operations.
//! - **Circuits**: [`Circuit`] is a named moment sequence tagged with the
//!   [`DeviceClass`] it was constructed against.
//! - **Schedules**: [`Schedule`] places operations at absolute
//!   [`Timestamp`]s with explicit [`Duration`]s.
//!
//! # Example: one moment on a 2×2 lattice
//!
//! ```rust
//! use lattica_ir::{GridQubit, Moment, Operation};
//!
//! let a = GridQubit::new(0, 0);
//! let b = GridQubit::new(0, 1);
//!
//! let moment = Moment::new([
//!     Operation::interaction(a, b),
//!     Operation::rotation(GridQubit::new(1, 0)),
//! ])
//! .unwrap();
//!
//! assert_eq!(moment.len(), 2);
//! assert!(moment.operates_on(&[a]));
//! ```

pub mod circuit;
pub mod duration;
pub mod error;
pub mod gate;
pub mod moment;
pub mod operation;
pub mod qubit;
pub mod schedule;

pub use circuit::{Circuit, DeviceClass};
pub use duration::{Duration, Timestamp};
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, GateKind, ShiftSwapGate, SwapNetworkGate};
pub use moment::Moment;
pub use operation::{Operation, OperationKind};
pub use qubit::GridQubit;
pub use schedule::{Schedule, ScheduledOperation};
