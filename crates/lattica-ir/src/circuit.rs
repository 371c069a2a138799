//! Circuits: ordered sequences of moments.

use serde::{Deserialize, Serialize};

use crate::moment::Moment;
use crate::operation::Operation;

/// The device family a circuit was constructed against.
///
/// The tag travels with the circuit so downstream consumers can tell which
/// validation regime applies without holding a device value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    /// No hardware constraints assumed.
    #[default]
    Unconstrained,
    /// Timed grid hardware.
    Grid,
    /// Acquaintance and permutation strategies only.
    Acquaintance,
}

/// A named sequence of moments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    moments: Vec<Moment>,
    device_class: DeviceClass,
}

impl Circuit {
    /// Create a new empty circuit with no device constraints assumed.
    pub fn new(name: impl Into<String>) -> Self {
        Self::for_device(name, DeviceClass::Unconstrained)
    }

    /// Create a new empty circuit constructed against a device family.
    pub fn for_device(name: impl Into<String>, device_class: DeviceClass) -> Self {
        Self {
            name: name.into(),
            moments: vec![],
            device_class,
        }
    }

    /// The name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The device family this circuit was constructed against.
    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// Append a moment.
    pub fn push(&mut self, moment: Moment) -> &mut Self {
        self.moments.push(moment);
        self
    }

    /// The moments of the circuit, in order.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// Iterate over every operation, moment by moment.
    pub fn all_operations(&self) -> impl Iterator<Item = &Operation> {
        self.moments.iter().flat_map(|m| m.operations().iter())
    }

    /// The number of moments.
    pub fn num_moments(&self) -> usize {
        self.moments.len()
    }

    /// Check whether the circuit contains no moments.
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::GridQubit;

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    #[test]
    fn test_all_operations_order() {
        let mut circuit = Circuit::new("test");
        circuit.push(Moment::new([Operation::rotation(q(0, 0))]).unwrap());
        circuit.push(Moment::new([Operation::measurement("m0", [q(0, 0)])]).unwrap());

        let names: Vec<_> = circuit.all_operations().map(Operation::name).collect();
        assert_eq!(names, vec!["rotation", "measure"]);
        assert_eq!(circuit.num_moments(), 2);
    }

    #[test]
    fn test_device_class_tag() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.device_class(), DeviceClass::Unconstrained);

        let strategy = Circuit::for_device("strategy", DeviceClass::Acquaintance);
        assert_eq!(strategy.device_class(), DeviceClass::Acquaintance);
        assert!(strategy.is_empty());
    }
}
