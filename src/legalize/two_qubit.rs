//! RXX(θ) → RXX(θ') with θ' ∈ [0, π/2] plus local π corrections
//!
//! Two identities do all the work:
//! * `RZ(π)_a · RXX(m) · RZ(π)_a ∝ RXX(-m)` flips the sign of the angle;
//! * `RX(π)_a ⊗ RX(π)_b ∝ RXX(π)` shifts the angle by π.

use std::f64::consts::PI;

use crate::error::{LegalizeError, Result};
use crate::legalize::angle::{fold_rxx_angle, FoldRegion, FoldSign, RxxFold};
use crate::legalize::rule::RewriteRule;
use crate::quantum::{GateKind, Instruction, ParametrizedGate};

/// Native sequence equal to RXX(θ) on `(qubit_a, qubit_b)` up to global phase
pub fn wrap_rxx_angle(theta: f64, qubit_a: usize, qubit_b: usize) -> Result<Vec<Instruction>> {
    let fold = fold_rxx_angle(theta)?;
    expand_fold(&fold, qubit_a, qubit_b)
}

/// Instruction template for each (region, sign) pair, in circuit order
fn expand_fold(fold: &RxxFold, a: usize, b: usize) -> Result<Vec<Instruction>> {
    let rxx = Instruction::rxx(a, b, fold.magnitude)?;

    let sequence = match (fold.region, fold.sign) {
        (FoldRegion::Low, FoldSign::Positive) => vec![rxx],
        (FoldRegion::Low, FoldSign::Negative) => vec![
            Instruction::rz(a, PI),
            rxx,
            Instruction::rz(a, PI),
        ],
        (FoldRegion::High, FoldSign::Positive) => vec![
            Instruction::rx(a, PI),
            Instruction::rx(b, PI),
            rxx,
        ],
        (FoldRegion::High, FoldSign::Negative) => vec![
            Instruction::rx(a, PI),
            Instruction::rx(b, PI),
            Instruction::rz(a, PI),
            rxx,
            Instruction::rz(a, PI),
        ],
    };

    Ok(sequence)
}

/// Rewrites RXX instructions into a native-range RXX with corrections
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoQubitNormalizer;

impl RewriteRule for TwoQubitNormalizer {
    fn name(&self) -> &'static str {
        "two-qubit-normalizer"
    }

    fn applies_to(&self, kind: GateKind) -> bool {
        kind == GateKind::RXX
    }

    fn rewrite(&self, instruction: &Instruction) -> Result<Vec<Instruction>> {
        match (instruction.gate, instruction.qubits.as_slice()) {
            (ParametrizedGate::Rxx(theta), &[a, b]) => wrap_rxx_angle(theta, a, b),
            (ParametrizedGate::Rxx(_), qubits) => Err(LegalizeError::ArityMismatch {
                gate: GateKind::RXX,
                expected: 2,
                found: qubits.len(),
            }),
            (other, _) => Err(LegalizeError::UnsupportedOperation(other.kind())),
        }
    }
}
