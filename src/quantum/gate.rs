// src/quantum/gate.rs
//! Rotation gates understood by the legalizer
//!
//! Gates carry their real parameters and know their unitary matrix, so any
//! rewrite can be checked against the gate it replaces.

use std::fmt::{self, Debug};

use ndarray::{array, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Common complex numbers used in gate matrices
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
}

/// Parameter-free discriminant of a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GateKind {
    RX,
    RY,
    RZ,
    R,
    RXX,
}

impl GateKind {
    /// Number of qubits a gate of this kind acts on
    pub fn qubit_count(self) -> usize {
        match self {
            GateKind::RX | GateKind::RY | GateKind::RZ | GateKind::R => 1,
            GateKind::RXX => 2,
        }
    }

    /// Lowercase name as used in backend basis-gate lists
    pub fn as_str(self) -> &'static str {
        match self {
            GateKind::RX => "rx",
            GateKind::RY => "ry",
            GateKind::RZ => "rz",
            GateKind::R => "r",
            GateKind::RXX => "rxx",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for quantum gates
pub trait QuantumGate: Debug + Send + Sync {
    /// Returns the number of qubits this gate acts on
    fn qubit_count(&self) -> usize;

    /// Returns the matrix representation of this gate
    fn matrix(&self) -> Array2<Complex64>;

    /// Returns a display name for this gate
    fn name(&self) -> String;

    /// Compares this gate with another gate for exact matrix equality within 1e-10
    fn equals(&self, other: &dyn QuantumGate) -> bool {
        let m1 = self.matrix();
        let m2 = other.matrix();

        if m1.shape() != m2.shape() {
            return false;
        }

        m1.iter()
            .zip(m2.iter())
            .all(|(a, b)| (a.re - b.re).abs() <= 1e-10 && (a.im - b.im).abs() <= 1e-10)
    }
}

/// Parametrized rotation gates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParametrizedGate {
    /// Rotation around X-axis
    Rx(f64),

    /// Rotation around Y-axis
    Ry(f64),

    /// Rotation around Z-axis
    Rz(f64),

    /// Rotation by θ around the equatorial axis at azimuth φ
    R(f64, f64),

    /// Two-qubit Mølmer–Sørensen style XX interaction
    Rxx(f64),
}

impl ParametrizedGate {
    pub fn kind(&self) -> GateKind {
        match self {
            ParametrizedGate::Rx(_) => GateKind::RX,
            ParametrizedGate::Ry(_) => GateKind::RY,
            ParametrizedGate::Rz(_) => GateKind::RZ,
            ParametrizedGate::R(_, _) => GateKind::R,
            ParametrizedGate::Rxx(_) => GateKind::RXX,
        }
    }

    /// Parameters in declaration order
    pub fn params(&self) -> Vec<f64> {
        match *self {
            ParametrizedGate::Rx(theta)
            | ParametrizedGate::Ry(theta)
            | ParametrizedGate::Rz(theta)
            | ParametrizedGate::Rxx(theta) => vec![theta],
            ParametrizedGate::R(theta, phi) => vec![theta, phi],
        }
    }

    /// The rotation angle θ common to every variant
    pub fn theta(&self) -> f64 {
        match *self {
            ParametrizedGate::Rx(theta)
            | ParametrizedGate::Ry(theta)
            | ParametrizedGate::Rz(theta)
            | ParametrizedGate::Rxx(theta)
            | ParametrizedGate::R(theta, _) => theta,
        }
    }

    /// Returns the adjoint (Hermitian conjugate) of this gate
    pub fn adjoint(&self) -> ParametrizedGate {
        match *self {
            // Rotation gates have adjoint = rotation by negative angle
            ParametrizedGate::Rx(theta) => ParametrizedGate::Rx(-theta),
            ParametrizedGate::Ry(theta) => ParametrizedGate::Ry(-theta),
            ParametrizedGate::Rz(theta) => ParametrizedGate::Rz(-theta),
            ParametrizedGate::R(theta, phi) => ParametrizedGate::R(-theta, phi),
            ParametrizedGate::Rxx(theta) => ParametrizedGate::Rxx(-theta),
        }
    }
}

impl QuantumGate for ParametrizedGate {
    fn qubit_count(&self) -> usize {
        self.kind().qubit_count()
    }

    fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match *self {
            ParametrizedGate::Rx(theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
                    [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)]
                ]
            }
            ParametrizedGate::Ry(theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
                    [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)]
                ]
            }
            ParametrizedGate::Rz(theta) => {
                let phase_pos = Complex64::new(0.0, theta / 2.0).exp();
                let phase_neg = Complex64::new(0.0, -theta / 2.0).exp();
                array![[phase_neg, ZERO], [ZERO, phase_pos]]
            }
            ParametrizedGate::R(theta, phi) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                let off_lower = -I * Complex64::new(0.0, phi).exp() * sin;
                let off_upper = -I * Complex64::new(0.0, -phi).exp() * sin;
                array![
                    [Complex64::new(cos, 0.0), off_upper],
                    [off_lower, Complex64::new(cos, 0.0)]
                ]
            }
            ParametrizedGate::Rxx(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, -(theta / 2.0).sin());
                array![
                    [c, ZERO, ZERO, s],
                    [ZERO, c, s, ZERO],
                    [ZERO, s, c, ZERO],
                    [s, ZERO, ZERO, c]
                ]
            }
        }
    }

    fn name(&self) -> String {
        match self {
            ParametrizedGate::Rx(theta) => format!("Rx({:.2})", theta),
            ParametrizedGate::Ry(theta) => format!("Ry({:.2})", theta),
            ParametrizedGate::Rz(theta) => format!("Rz({:.2})", theta),
            ParametrizedGate::R(theta, phi) => format!("R({:.2}, {:.2})", theta, phi),
            ParametrizedGate::Rxx(theta) => format!("Rxx({:.2})", theta),
        }
    }
}

impl fmt::Display for ParametrizedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn is_unitary(m: &Array2<Complex64>) -> bool {
        let adjoint = m.t().mapv(|z| z.conj());
        let product = adjoint.dot(m);
        product.indexed_iter().all(|((i, j), z)| {
            let expected = if i == j { 1.0 } else { 0.0 };
            (z.re - expected).abs() < 1e-12 && z.im.abs() < 1e-12
        })
    }

    #[test]
    fn test_all_gates_unitary() {
        let gates = [
            ParametrizedGate::Rx(0.3),
            ParametrizedGate::Ry(-1.7),
            ParametrizedGate::Rz(2.9),
            ParametrizedGate::R(1.1, 4.2),
            ParametrizedGate::Rxx(0.8),
        ];
        for gate in gates {
            assert!(is_unitary(&gate.matrix()), "{} is not unitary", gate);
            assert_eq!(gate.matrix().nrows(), 1 << gate.qubit_count());
        }
    }

    #[test]
    fn test_r_special_axes() {
        // R(θ, 0) = RX(θ) and R(θ, π/2) = RY(θ) exactly
        let theta = 1.234;
        assert!(ParametrizedGate::R(theta, 0.0).equals(&ParametrizedGate::Rx(theta)));
        assert!(ParametrizedGate::R(theta, FRAC_PI_2).equals(&ParametrizedGate::Ry(theta)));
    }

    #[test]
    fn test_r_sign_flip_identity() {
        // R(θ, φ) = R(-θ, φ + π)
        let a = ParametrizedGate::R(0.7, 0.4);
        let b = ParametrizedGate::R(-0.7, 0.4 + PI);
        assert!(a.equals(&b));
    }

    #[test]
    fn test_adjoint_inverts() {
        let gate = ParametrizedGate::Rxx(1.3);
        let product = gate.matrix().dot(&gate.adjoint().matrix());
        assert!(ParametrizedGate::Rxx(0.0).matrix().iter().zip(product.iter())
            .all(|(a, b)| (a - b).norm() < 1e-12));
    }

    #[test]
    fn test_kind_and_params() {
        let gate = ParametrizedGate::R(0.5, 1.5);
        assert_eq!(gate.kind(), GateKind::R);
        assert_eq!(gate.params(), vec![0.5, 1.5]);
        assert_eq!(gate.theta(), 0.5);
        assert_eq!(GateKind::RXX.qubit_count(), 2);
        assert_eq!(GateKind::RXX.to_string(), "rxx");
    }
}
