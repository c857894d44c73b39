//! Angle folding shared by the rewrite rules
//!
//! All boundaries are closed on the lower side of each region, so exact
//! values such as π/2 and 3π/2 always land in the same case.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{LegalizeError, Result};
use crate::quantum::GateKind;

const THREE_FRAC_PI_2: f64 = 3.0 * FRAC_PI_2;

/// Folded angles this close to zero are treated as exactly zero. Covers the
/// residue of whole turns of the float `TAU` up to |θ| ≈ 120.
const ZERO_SNAP: f64 = 64.0 * f64::EPSILON;

/// Reject NaN and infinite parameters
pub fn check_finite(gate: GateKind, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LegalizeError::InvalidArgument { gate, value })
    }
}

/// Representative of `theta` on the circle, in `[-π, π]`.
///
/// Angles already in `(-π, π]` are returned bit-for-bit. Anything else goes
/// through `atan2(sin θ, cos θ)`, and a result within a fixed few-ulp band of
/// zero is snapped to exactly `0.0`. The band does not grow with `|θ|`, so a
/// large input never loses a real residual rotation.
pub fn wrap_to_pi(theta: f64) -> f64 {
    if theta > -PI && theta <= PI {
        return theta;
    }

    let wrapped = theta.sin().atan2(theta.cos());
    if wrapped.abs() <= ZERO_SNAP {
        0.0
    } else {
        wrapped
    }
}

/// Whether the folded RXX needs the X⊗X prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRegion {
    /// Angle reached without the X⊗X correction
    Low,
    /// Angle reached after factoring out RXX(π) ∝ RX(π)⊗RX(π)
    High,
}

/// Whether the folded RXX needs the Z conjugation on its first qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldSign {
    Positive,
    Negative,
}

/// Canonical reduction of an RXX angle: `RXX(θ) ∝ X⊗X^[High] · RXX(±magnitude)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RxxFold {
    /// Native angle in `[0, π/2]`
    pub magnitude: f64,
    pub region: FoldRegion,
    pub sign: FoldSign,
}

impl RxxFold {
    fn low(signed: f64) -> Self {
        RxxFold::new(FoldRegion::Low, signed)
    }

    fn high(signed: f64) -> Self {
        RxxFold::new(FoldRegion::High, signed)
    }

    fn new(region: FoldRegion, signed: f64) -> Self {
        let sign = if signed < 0.0 {
            FoldSign::Negative
        } else {
            FoldSign::Positive
        };
        RxxFold {
            // One ulp of rounding in the subtraction must not leave the native range
            magnitude: signed.abs().min(FRAC_PI_2),
            region,
            sign,
        }
    }
}

/// Fold an arbitrary finite RXX angle into a native magnitude plus corrections.
///
/// | reduced angle            | region | sign                 | magnitude |
/// |--------------------------|--------|----------------------|-----------|
/// | θ ∈ [-π/2, π/2]          | Low    | sign of θ            | \|θ\|     |
/// | t = θ mod 2π ∈ [0, π/2]  | Low    | Positive             | t         |
/// | t ∈ (π/2, 3π/2]          | High   | sign of t - π        | \|t - π\| |
/// | t ∈ (3π/2, 2π)           | Low    | Negative             | 2π - t    |
pub fn fold_rxx_angle(theta: f64) -> Result<RxxFold> {
    let theta = check_finite(GateKind::RXX, theta)?;

    if theta.abs() <= FRAC_PI_2 {
        return Ok(RxxFold::low(theta));
    }

    // RXX is 2π-periodic up to a sign
    let t = theta.rem_euclid(TAU);

    let fold = if t <= FRAC_PI_2 {
        RxxFold::low(t)
    } else if t <= THREE_FRAC_PI_2 {
        RxxFold::high(t - PI)
    } else {
        RxxFold::low(t - TAU)
    };

    Ok(fold)
}
