// src/quantum/mod.rs
//! Gates, instructions and circuits
//!
//! Circuits are plain ordered instruction lists over a fixed number of qubits;
//! their semantics is the left-to-right product of the gate unitaries.

pub mod circuit;
pub mod gate;
pub mod library;

pub use circuit::{CircuitBuilder, Instruction, QuantumCircuit};
pub use gate::{GateKind, ParametrizedGate, QuantumGate};
pub use library::{qft_circuit, random_rotation_circuit};

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::{CircuitBuilder, Instruction, QuantumCircuit};
    pub use super::{GateKind, ParametrizedGate, QuantumGate};
}
