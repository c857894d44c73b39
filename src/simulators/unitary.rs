//! Unitary simulator
//!
//! Computes the full unitary of a circuit. Qubit 0 is the most significant
//! bit of a basis-state index (big-endian), and the first qubit listed in a
//! multi-qubit instruction is the most significant bit of the gate's own index.

use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayViewMut1, Axis};
use num_complex::Complex64;

use crate::error::{LegalizeError, Result};
use crate::quantum::{Instruction, QuantumCircuit, QuantumGate};

/// Computes circuit unitaries by evolving every basis column independently
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitarySimulator;

impl UnitarySimulator {
    pub fn new() -> Self {
        UnitarySimulator
    }

    /// The unitary of the whole circuit, `U = G_n ⋯ G_2 G_1`
    pub fn unitary(&self, circuit: &QuantumCircuit) -> Result<Array2<Complex64>> {
        let qubit_count = circuit.qubit_count;
        let mut operations = Vec::with_capacity(circuit.gate_count());
        for instruction in circuit {
            check_qubits(instruction, qubit_count)?;
            operations.push((instruction.gate.matrix(), instruction.qubits.clone()));
        }

        let mut unitary = Array2::<Complex64>::eye(1 << qubit_count);
        unitary
            .axis_iter_mut(Axis(1))
            .into_par_iter()
            .for_each(|mut column| {
                for (matrix, qubits) in &operations {
                    apply_gate(&mut column, matrix, qubits, qubit_count);
                }
            });

        Ok(unitary)
    }

    /// The unitary of a single instruction embedded in a `qubit_count`-qubit register
    pub fn instruction_unitary(
        &self,
        instruction: &Instruction,
        qubit_count: usize,
    ) -> Result<Array2<Complex64>> {
        let mut circuit = QuantumCircuit::new(qubit_count);
        circuit.add_instruction(instruction.clone())?;
        self.unitary(&circuit)
    }
}

fn check_qubits(instruction: &Instruction, qubit_count: usize) -> Result<()> {
    instruction.check_shape()?;
    match instruction.qubits.iter().find(|&&q| q >= qubit_count) {
        Some(&qubit) => Err(LegalizeError::QubitOutOfRange { qubit, qubit_count }),
        None => Ok(()),
    }
}

/// Apply a gate matrix in place to one state vector
fn apply_gate(
    amplitudes: &mut ArrayViewMut1<Complex64>,
    matrix: &Array2<Complex64>,
    qubits: &[usize],
    qubit_count: usize,
) {
    let num_targets = qubits.len();
    let sub_dim = 1 << num_targets;
    let masks: Vec<usize> = qubits
        .iter()
        .map(|&q| 1 << (qubit_count - 1 - q))
        .collect();
    let target_mask = masks.iter().fold(0, |acc, mask| acc | mask);

    let mut indices = vec![0usize; sub_dim];
    let mut buffer = vec![Complex64::new(0.0, 0.0); sub_dim];

    for base in 0..(1usize << qubit_count) {
        // Visit each group of amplitudes once, from the member with all target bits clear
        if base & target_mask != 0 {
            continue;
        }

        for sub in 0..sub_dim {
            let mut index = base;
            for (position, mask) in masks.iter().enumerate() {
                if (sub >> (num_targets - 1 - position)) & 1 == 1 {
                    index |= mask;
                }
            }
            indices[sub] = index;
            buffer[sub] = amplitudes[index];
        }

        for row in 0..sub_dim {
            let mut acc = Complex64::new(0.0, 0.0);
            for col in 0..sub_dim {
                acc += matrix[[row, col]] * buffer[col];
            }
            amplitudes[indices[row]] = acc;
        }
    }
}
