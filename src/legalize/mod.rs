//! Rewrite rules from arbitrary rotations to the trapped-ion native gate set
//!
//! * [`single_qubit`]: RX(θ), RY(θ) → R(θ' ∈ [0, π], φ)
//! * [`two_qubit`]: RXX(θ) → RXX(θ' ∈ [0, π/2]) with RX(π) / RZ(π) corrections
//! * [`pass`]: splices rule output into a circuit and checks it against a [`NativeGateSet`]
//!
//! Every rule is a pure function of its input instruction and is safe to call
//! from any number of threads.

pub mod angle;
pub mod pass;
pub mod rule;
pub mod single_qubit;
pub mod target;
pub mod two_qubit;

pub use angle::{fold_rxx_angle, wrap_to_pi, FoldRegion, FoldSign, RxxFold};
pub use pass::{legalize_circuit, LegalizationPass, QuantumCircuitTransformation};
pub use rule::{legalize_instruction, RewriteRule};
pub use single_qubit::{rewrite_rx_as_r, rewrite_ry_as_r, SingleQubitNormalizer};
pub use target::NativeGateSet;
pub use two_qubit::{wrap_rxx_angle, TwoQubitNormalizer};

pub mod prelude {
    pub use super::{legalize_circuit, legalize_instruction, LegalizationPass, NativeGateSet};
    pub use super::{QuantumCircuitTransformation, RewriteRule};
    pub use super::{SingleQubitNormalizer, TwoQubitNormalizer};
}
