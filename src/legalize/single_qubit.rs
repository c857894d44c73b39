//! RX(θ) / RY(θ) → R(θ', φ)
//!
//! Uses `R(θ, 0) = RX(θ)`, `R(θ, π/2) = RY(θ)` and `R(θ, φ) = R(-θ, φ + π)`:
//! the angle is wrapped onto the circle, and a negative representative is
//! made positive by turning the rotation axis around.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{LegalizeError, Result};
use crate::legalize::angle::{check_finite, wrap_to_pi};
use crate::legalize::rule::RewriteRule;
use crate::quantum::{GateKind, Instruction, ParametrizedGate};

const THREE_FRAC_PI_2: f64 = 3.0 * FRAC_PI_2;

/// Native R(θ', φ) equal to RX(θ) up to global phase, with θ' ∈ [0, π] and φ ∈ {0, π}
pub fn rewrite_rx_as_r(theta: f64) -> Result<ParametrizedGate> {
    rotation_as_r(GateKind::RX, theta, 0.0, PI)
}

/// Native R(θ', φ) equal to RY(θ) up to global phase, with θ' ∈ [0, π] and φ ∈ {π/2, 3π/2}
pub fn rewrite_ry_as_r(theta: f64) -> Result<ParametrizedGate> {
    rotation_as_r(GateKind::RY, theta, FRAC_PI_2, THREE_FRAC_PI_2)
}

fn rotation_as_r(kind: GateKind, theta: f64, phi: f64, flipped_phi: f64) -> Result<ParametrizedGate> {
    let wrapped = wrap_to_pi(check_finite(kind, theta)?);

    if wrapped < 0.0 {
        Ok(ParametrizedGate::R(-wrapped, flipped_phi))
    } else {
        // -0.0 lands here too and comes out as +0.0
        Ok(ParametrizedGate::R(wrapped.abs(), phi))
    }
}

/// Rewrites RX and RY instructions into a single native R instruction
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleQubitNormalizer;

impl RewriteRule for SingleQubitNormalizer {
    fn name(&self) -> &'static str {
        "single-qubit-normalizer"
    }

    fn applies_to(&self, kind: GateKind) -> bool {
        matches!(kind, GateKind::RX | GateKind::RY)
    }

    fn rewrite(&self, instruction: &Instruction) -> Result<Vec<Instruction>> {
        let gate = match instruction.gate {
            ParametrizedGate::Rx(theta) => rewrite_rx_as_r(theta)?,
            ParametrizedGate::Ry(theta) => rewrite_ry_as_r(theta)?,
            other => return Err(LegalizeError::UnsupportedOperation(other.kind())),
        };

        Ok(vec![Instruction {
            gate,
            qubits: instruction.qubits.clone(),
        }])
    }
}
