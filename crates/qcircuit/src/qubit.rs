//! Registers, qubits and classical bits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named quantum register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumRegister {
    /// Register name.
    pub name: String,
    /// Number of qubits in the register.
    pub size: u32,
}

impl QuantumRegister {
    /// Create a new register.
    pub fn new(size: u32, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Get the qubit at `index` in this register.
    ///
    /// Returns `None` if the index is past the end of the register.
    pub fn qubit(&self, index: u32) -> Option<Qubit> {
        (index < self.size).then(|| Qubit::new(&self.name, index))
    }

    /// Iterate over all qubits of the register in order.
    pub fn qubits(&self) -> impl Iterator<Item = Qubit> + '_ {
        (0..self.size).map(|i| Qubit::new(&self.name, i))
    }
}

/// A named classical register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalRegister {
    /// Register name.
    pub name: String,
    /// Number of bits in the register.
    pub size: u32,
}

impl ClassicalRegister {
    /// Create a new register.
    pub fn new(size: u32, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Iterate over all bits of the register in order.
    pub fn clbits(&self) -> impl Iterator<Item = Clbit> + '_ {
        (0..self.size).map(|i| Clbit::new(&self.name, i))
    }
}

/// A quantum bit, addressed by register name and index within the register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// The name of the register this qubit belongs to.
    pub register: String,
    /// The index within the register.
    pub index: u32,
}

impl Qubit {
    /// Create a new qubit reference.
    pub fn new(register: impl Into<String>, index: u32) -> Self {
        Self {
            register: register.into(),
            index,
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.register, self.index)
    }
}

/// A classical bit, addressed by register name and index within the register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clbit {
    /// The name of the register this bit belongs to.
    pub register: String,
    /// The index within the register.
    pub index: u32,
}

impl Clbit {
    /// Create a new classical bit reference.
    pub fn new(register: impl Into<String>, index: u32) -> Self {
        Self {
            register: register.into(),
            index,
        }
    }
}

impl fmt::Display for Clbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.register, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        let q = Qubit::new("q", 0);
        assert_eq!(format!("{q}"), "q[0]");
    }

    #[test]
    fn test_clbit_display() {
        let c = Clbit::new("c", 3);
        assert_eq!(format!("{c}"), "c[3]");
    }

    #[test]
    fn test_register_bounds() {
        let qreg = QuantumRegister::new(2, "q");
        assert_eq!(qreg.qubit(1), Some(Qubit::new("q", 1)));
        assert_eq!(qreg.qubit(2), None);
        assert_eq!(qreg.qubits().count(), 2);
    }
}
