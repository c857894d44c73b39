use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LegalizeError, Result};
use crate::quantum::gate::{GateKind, ParametrizedGate, QuantumGate};

/// A gate bound to the qubits it acts on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub gate: ParametrizedGate,
    pub qubits: Vec<usize>,
}

impl Instruction {
    /// Create an instruction, checking the qubit count matches the gate arity
    pub fn new(gate: ParametrizedGate, qubits: &[usize]) -> Result<Self> {
        let instruction = Instruction {
            gate,
            qubits: qubits.to_vec(),
        };
        instruction.check_shape()?;
        Ok(instruction)
    }

    /// Check arity and qubit distinctness.
    ///
    /// Instructions built from the public fields or deserialized skip
    /// [`Instruction::new`], so consumers call this before trusting `qubits`.
    pub fn check_shape(&self) -> Result<()> {
        let expected = self.gate.qubit_count();
        if expected != self.qubits.len() {
            return Err(LegalizeError::ArityMismatch {
                gate: self.kind(),
                expected,
                found: self.qubits.len(),
            });
        }

        for (i, q) in self.qubits.iter().enumerate() {
            if self.qubits[..i].contains(q) {
                return Err(LegalizeError::DuplicateQubit(*q));
            }
        }
        Ok(())
    }

    pub fn rx(qubit: usize, theta: f64) -> Self {
        Instruction { gate: ParametrizedGate::Rx(theta), qubits: vec![qubit] }
    }

    pub fn ry(qubit: usize, theta: f64) -> Self {
        Instruction { gate: ParametrizedGate::Ry(theta), qubits: vec![qubit] }
    }

    pub fn rz(qubit: usize, theta: f64) -> Self {
        Instruction { gate: ParametrizedGate::Rz(theta), qubits: vec![qubit] }
    }

    pub fn r(qubit: usize, theta: f64, phi: f64) -> Self {
        Instruction { gate: ParametrizedGate::R(theta, phi), qubits: vec![qubit] }
    }

    /// RXX on two distinct qubits
    pub fn rxx(qubit1: usize, qubit2: usize, theta: f64) -> Result<Self> {
        Self::new(ParametrizedGate::Rxx(theta), &[qubit1, qubit2])
    }

    pub fn kind(&self) -> GateKind {
        self.gate.kind()
    }

    pub fn params(&self) -> Vec<f64> {
        self.gate.params()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.gate, self.qubits)
    }
}

/// A quantum circuit consisting of a sequence of instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumCircuit {
    pub instructions: Vec<Instruction>,
    pub qubit_count: usize,
}

impl QuantumCircuit {
    /// Create a new empty quantum circuit
    pub fn new(qubit_count: usize) -> Self {
        QuantumCircuit {
            instructions: Vec::new(),
            qubit_count,
        }
    }

    /// Append an instruction after validating its shape and qubit indices
    pub fn add_instruction(&mut self, instruction: Instruction) -> Result<()> {
        instruction.check_shape()?;
        for &q in &instruction.qubits {
            if q >= self.qubit_count {
                return Err(LegalizeError::QubitOutOfRange {
                    qubit: q,
                    qubit_count: self.qubit_count,
                });
            }
        }

        self.instructions.push(instruction);
        Ok(())
    }

    pub fn add_gate(&mut self, gate: ParametrizedGate, qubits: &[usize]) -> Result<()> {
        self.add_instruction(Instruction::new(gate, qubits)?)
    }

    /// Get the number of instructions in the circuit
    pub fn gate_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of instructions per gate kind
    pub fn count_ops(&self) -> BTreeMap<GateKind, usize> {
        let mut counts = BTreeMap::new();
        for instruction in &self.instructions {
            *counts.entry(instruction.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Compose this circuit with another circuit (self first, then other)
    pub fn compose(&self, other: &QuantumCircuit) -> Result<QuantumCircuit> {
        if self.qubit_count != other.qubit_count {
            return Err(LegalizeError::QubitCountMismatch {
                left: self.qubit_count,
                right: other.qubit_count,
            });
        }

        let mut result = self.clone();
        result.instructions.extend(other.instructions.iter().cloned());
        Ok(result)
    }

    /// Create the adjoint (dagger) of this circuit
    pub fn adjoint(&self) -> Self {
        let instructions = self
            .instructions
            .iter()
            .rev()
            .map(|instruction| Instruction {
                gate: instruction.gate.adjoint(),
                qubits: instruction.qubits.clone(),
            })
            .collect();

        QuantumCircuit {
            instructions,
            qubit_count: self.qubit_count,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a QuantumCircuit {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for QuantumCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QuantumCircuit({} qubits)", self.qubit_count)?;
        for instruction in &self.instructions {
            writeln!(f, "  {}", instruction)?;
        }
        Ok(())
    }
}

/// A builder for quantum circuits
pub struct CircuitBuilder {
    circuit: QuantumCircuit,
}

impl CircuitBuilder {
    /// Create a new circuit builder
    pub fn new(qubit_count: usize) -> Self {
        CircuitBuilder {
            circuit: QuantumCircuit::new(qubit_count),
        }
    }

    /// Build the quantum circuit
    pub fn build(self) -> QuantumCircuit {
        self.circuit
    }

    pub fn add_gate(&mut self, gate: ParametrizedGate, qubits: &[usize]) -> Result<&mut Self> {
        self.circuit.add_gate(gate, qubits)?;
        Ok(self)
    }

    /// Add an Rx gate
    pub fn rx(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(ParametrizedGate::Rx(theta), &[qubit])
    }

    /// Add an Ry gate
    pub fn ry(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(ParametrizedGate::Ry(theta), &[qubit])
    }

    /// Add an Rz gate
    pub fn rz(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(ParametrizedGate::Rz(theta), &[qubit])
    }

    /// Add a native R gate
    pub fn r(&mut self, qubit: usize, theta: f64, phi: f64) -> Result<&mut Self> {
        self.add_gate(ParametrizedGate::R(theta, phi), &[qubit])
    }

    /// Add an Rxx gate
    pub fn rxx(&mut self, qubit1: usize, qubit2: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(ParametrizedGate::Rxx(theta), &[qubit1, qubit2])
    }

    /// Hadamard up to global phase: RY(π/2) followed by RX(π)
    pub fn h(&mut self, qubit: usize) -> Result<&mut Self> {
        use std::f64::consts::{FRAC_PI_2, PI};
        self.ry(qubit, FRAC_PI_2)?;
        self.rx(qubit, PI)
    }

    /// ZZ interaction built from RXX by rotating both qubits' X axes onto Z
    pub fn rzz(&mut self, qubit1: usize, qubit2: usize, theta: f64) -> Result<&mut Self> {
        use std::f64::consts::FRAC_PI_2;
        self.ry(qubit1, FRAC_PI_2)?;
        self.ry(qubit2, FRAC_PI_2)?;
        self.rxx(qubit1, qubit2, theta)?;
        self.ry(qubit1, -FRAC_PI_2)?;
        self.ry(qubit2, -FRAC_PI_2)
    }

    /// Controlled phase up to global phase: RZ(λ/2) ⊗ RZ(λ/2) · RZZ(-λ/2)
    pub fn cphase(&mut self, control: usize, target: usize, lambda: f64) -> Result<&mut Self> {
        self.rz(control, lambda / 2.0)?;
        self.rz(target, lambda / 2.0)?;
        self.rzz(control, target, -lambda / 2.0)
    }
}
