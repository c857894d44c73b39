//! Circuit-level driver for the rewrite rules

use std::fmt::Debug;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::LegalizerConfig;
use crate::error::{LegalizeError, Result};
use crate::legalize::rule::{legalize_instruction, RewriteRule};
use crate::legalize::single_qubit::SingleQubitNormalizer;
use crate::legalize::target::NativeGateSet;
use crate::quantum::{Instruction, QuantumCircuit};
use crate::simulators::circuits_equivalent;

/// Base trait for whole-circuit transformations
pub trait QuantumCircuitTransformation: Send + Sync + Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Transform a quantum circuit, leaving the input untouched
    fn transform(&self, circuit: &QuantumCircuit) -> Result<QuantumCircuit>;
}

/// Replaces every RX, RY and RXX instruction with its native rewrite in place.
///
/// Instructions without a rule (RZ, R) are copied through unchanged.
#[derive(Debug, Clone, Default)]
pub struct LegalizationPass {
    config: LegalizerConfig,
    target: NativeGateSet,
}

impl LegalizationPass {
    pub fn new(config: LegalizerConfig) -> Self {
        LegalizationPass {
            config,
            target: NativeGateSet::default(),
        }
    }

    pub fn with_target(mut self, target: NativeGateSet) -> Self {
        self.target = target;
        self
    }

    pub fn config(&self) -> &LegalizerConfig {
        &self.config
    }

    pub fn target(&self) -> &NativeGateSet {
        &self.target
    }

    /// Legalize independent circuits in parallel; output order matches input order
    pub fn run_many(&self, circuits: &[QuantumCircuit]) -> Result<Vec<QuantumCircuit>> {
        circuits
            .par_iter()
            .map(|circuit| self.transform(circuit))
            .collect()
    }

    /// Replacement for one instruction, or `None` when it has no rule
    fn replacement(&self, instruction: &Instruction) -> Result<Option<Vec<Instruction>>> {
        let rewritten = match legalize_instruction(instruction) {
            Ok(rewritten) => rewritten,
            Err(LegalizeError::UnsupportedOperation(_)) => return Ok(None),
            Err(err) => return Err(err),
        };

        if !self.config.lower_corrections {
            return Ok(Some(rewritten));
        }

        // Corrective RX(π) from the two-qubit rule becomes R(π, 0)
        let mut lowered = Vec::with_capacity(rewritten.len());
        for emitted in rewritten {
            if SingleQubitNormalizer.applies_to(emitted.kind()) {
                lowered.extend(SingleQubitNormalizer.rewrite(&emitted)?);
            } else {
                lowered.push(emitted);
            }
        }
        Ok(Some(lowered))
    }
}

impl QuantumCircuitTransformation for LegalizationPass {
    fn name(&self) -> &'static str {
        "legalization"
    }

    #[tracing::instrument(skip(self, circuit), fields(qubits = circuit.qubit_count, gates = circuit.gate_count()))]
    fn transform(&self, circuit: &QuantumCircuit) -> Result<QuantumCircuit> {
        let mut result = QuantumCircuit::new(circuit.qubit_count);
        let mut rewritten = 0usize;

        for (position, instruction) in circuit.iter().enumerate() {
            instruction.check_shape()?;
            match self.replacement(instruction)? {
                Some(sequence) => {
                    debug!(position, from = %instruction, emitted = sequence.len(), "rewrote instruction");
                    rewritten += 1;
                    for emitted in sequence {
                        result.add_instruction(emitted)?;
                    }
                }
                None => result.add_instruction(instruction.clone())?,
            }
        }

        if self.config.validate_output {
            self.target.validate(&result)?;
        }

        if self.config.check_equivalence {
            let tolerance = self.config.equivalence_tolerance;
            if !circuits_equivalent(circuit, &result, tolerance)? {
                return Err(LegalizeError::NotEquivalent { tolerance });
            }
            debug!(tolerance, "output matches input up to global phase");
        }

        info!(
            rewritten,
            input_gates = circuit.gate_count(),
            output_gates = result.gate_count(),
            "legalization finished"
        );
        Ok(result)
    }
}

/// Legalize a circuit with the default configuration and trapped-ion target
pub fn legalize_circuit(circuit: &QuantumCircuit) -> Result<QuantumCircuit> {
    LegalizationPass::default().transform(circuit)
}
