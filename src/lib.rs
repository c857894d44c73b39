//! Native-gate legalization for trapped-ion quantum backends
//!
//! This crate rewrites arbitrary-angle rotation instructions (RX, RY, RXX)
//! into the restricted native forms a trapped-ion backend executes directly:
//! a single-qubit R(θ, φ) with θ ∈ [0, π] and an entangling RXX(θ) with
//! θ ∈ [0, π/2]. Every rewrite preserves the circuit unitary up to global phase.
//!
//! The rewrite rules live in [`legalize`]; the circuit data model in [`quantum`];
//! the unitary simulator and phase-insensitive equivalence checks used to
//! validate rewrites in [`simulators`].

pub mod config;
pub mod error;
pub mod legalize;
pub mod quantum;
pub mod simulators;

pub use config::LegalizerConfig;
pub use error::{LegalizeError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::config::LegalizerConfig;
    pub use crate::error::{LegalizeError, Result};
    pub use crate::legalize::prelude::*;
    pub use crate::quantum::prelude::*;
    pub use crate::simulators::{circuits_equivalent, equivalent_up_to_global_phase, UnitarySimulator};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
