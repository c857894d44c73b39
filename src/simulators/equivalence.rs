//! Global-phase-insensitive comparison of unitaries and circuits

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{LegalizeError, Result};
use crate::quantum::QuantumCircuit;
use crate::simulators::UnitarySimulator;

/// The unit-modulus scalar `p` with `b ≈ p·a`, if one exists within `tolerance`
pub fn global_phase(
    a: &Array2<Complex64>,
    b: &Array2<Complex64>,
    tolerance: f64,
) -> Option<Complex64> {
    if a.dim() != b.dim() {
        return None;
    }

    // Derive the phase from the entry least sensitive to rounding
    let (index, pivot) = a
        .indexed_iter()
        .max_by(|(_, x), (_, y)| x.norm().total_cmp(&y.norm()))?;

    if pivot.norm() <= tolerance {
        return None;
    }

    let ratio = b[index] / pivot;
    if (ratio.norm() - 1.0).abs() > tolerance {
        return None;
    }
    let phase = ratio / ratio.norm();

    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (y - phase * x).norm() <= tolerance)
        .then_some(phase)
}

/// Whether `a` and `b` differ only by a unit-modulus scalar factor
pub fn equivalent_up_to_global_phase(
    a: &Array2<Complex64>,
    b: &Array2<Complex64>,
    tolerance: f64,
) -> bool {
    global_phase(a, b, tolerance).is_some()
}

/// Whether two circuits implement the same unitary up to global phase
pub fn circuits_equivalent(
    left: &QuantumCircuit,
    right: &QuantumCircuit,
    tolerance: f64,
) -> Result<bool> {
    if left.qubit_count != right.qubit_count {
        return Err(LegalizeError::QubitCountMismatch {
            left: left.qubit_count,
            right: right.qubit_count,
        });
    }

    let simulator = UnitarySimulator::new();
    let u_left = simulator.unitary(left)?;
    let u_right = simulator.unitary(right)?;
    Ok(equivalent_up_to_global_phase(&u_left, &u_right, tolerance))
}
