use std::collections::BTreeSet;
use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::{LegalizeError, Result};
use crate::quantum::{GateKind, Instruction, QuantumCircuit};

/// Gate kinds a backend executes directly, with their parameter ranges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeGateSet {
    kinds: BTreeSet<GateKind>,
}

impl Default for NativeGateSet {
    fn default() -> Self {
        Self::trapped_ion()
    }
}

impl NativeGateSet {
    pub fn new(kinds: impl IntoIterator<Item = GateKind>) -> Self {
        NativeGateSet {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// RZ (virtual, any angle), R(θ ∈ [0, π], φ) and RXX(θ ∈ [0, π/2])
    pub fn trapped_ion() -> Self {
        Self::new([GateKind::RZ, GateKind::R, GateKind::RXX])
    }

    pub fn contains(&self, kind: GateKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = GateKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Check one instruction found at `position` in a circuit
    pub fn check(&self, position: usize, instruction: &Instruction) -> Result<()> {
        instruction.check_shape()?;

        let gate = instruction.kind();
        if !self.contains(gate) {
            return Err(LegalizeError::NotNative { position, gate });
        }

        let params = instruction.params();
        if let Some(&value) = params.iter().find(|p| !p.is_finite()) {
            return Err(LegalizeError::ParameterOutOfRange { position, gate, value });
        }

        let theta = instruction.gate.theta();
        let in_range = match gate {
            GateKind::R => (0.0..=PI).contains(&theta),
            GateKind::RXX => (0.0..=FRAC_PI_2).contains(&theta),
            _ => true,
        };

        if in_range {
            Ok(())
        } else {
            Err(LegalizeError::ParameterOutOfRange { position, gate, value: theta })
        }
    }

    /// Whether a single instruction is directly executable
    pub fn is_legal(&self, instruction: &Instruction) -> bool {
        self.check(0, instruction).is_ok()
    }

    /// Check every instruction of a circuit, reporting the first offender
    pub fn validate(&self, circuit: &QuantumCircuit) -> Result<()> {
        circuit
            .iter()
            .enumerate()
            .try_for_each(|(position, instruction)| self.check(position, instruction))
    }
}
