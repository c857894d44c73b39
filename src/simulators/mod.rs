//! Simulation used to validate rewrites
//!
//! This module computes circuit unitaries and compares them up to global
//! phase, which is how every legalization rule is checked.

pub mod equivalence;
pub mod unitary;

pub use equivalence::{circuits_equivalent, equivalent_up_to_global_phase, global_phase};
pub use unitary::UnitarySimulator;
