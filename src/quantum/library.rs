//! Reference circuits used to exercise legalization end to end

use std::f64::consts::PI;

use rand::Rng;

use crate::error::{LegalizeError, Result};
use crate::quantum::circuit::{CircuitBuilder, QuantumCircuit};

/// Quantum Fourier transform on `qubit_count` qubits, without the final qubit reversal.
///
/// Built only from RX, RY, RZ and RXX so every entangling step goes through
/// the two-qubit normalizer.
pub fn qft_circuit(qubit_count: usize) -> Result<QuantumCircuit> {
    let mut builder = CircuitBuilder::new(qubit_count);

    for target in (0..qubit_count).rev() {
        builder.h(target)?;
        for control in 0..target {
            let lambda = PI / f64::powi(2.0, (target - control) as i32);
            builder.cphase(target, control, lambda)?;
        }
    }

    Ok(builder.build())
}

/// Random circuit of `depth` layers mixing RX, RY, RZ and RXX with angles in
/// `[-max_angle, max_angle]`. `max_angle` must be finite and non-negative.
pub fn random_rotation_circuit<R: Rng + ?Sized>(
    qubit_count: usize,
    depth: usize,
    max_angle: f64,
    rng: &mut R,
) -> Result<QuantumCircuit> {
    if !max_angle.is_finite() || max_angle < 0.0 {
        return Err(LegalizeError::InvalidAngleBound(max_angle));
    }

    let mut builder = CircuitBuilder::new(qubit_count);
    if qubit_count == 0 {
        return Ok(builder.build());
    }

    for _ in 0..depth {
        for qubit in 0..qubit_count {
            let theta = rng.gen_range(-max_angle..=max_angle);
            match rng.gen_range(0..3) {
                0 => builder.rx(qubit, theta)?,
                1 => builder.ry(qubit, theta)?,
                _ => builder.rz(qubit, theta)?,
            };
        }

        if qubit_count > 1 {
            let a = rng.gen_range(0..qubit_count);
            let mut b = rng.gen_range(0..qubit_count - 1);
            if b >= a {
                b += 1;
            }
            builder.rxx(a, b, rng.gen_range(-max_angle..=max_angle))?;
        }
    }

    Ok(builder.build())
}
