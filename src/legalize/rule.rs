use std::fmt::Debug;

use crate::error::{LegalizeError, Result};
use crate::legalize::single_qubit::SingleQubitNormalizer;
use crate::legalize::two_qubit::TwoQubitNormalizer;
use crate::quantum::{GateKind, Instruction};

/// A per-instruction rewrite into an equivalent native sequence.
///
/// Rules are pure: the output depends only on the input instruction, and the
/// order of the returned instructions is part of the equivalence.
pub trait RewriteRule: Send + Sync + Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether this rule handles instructions of the given kind
    fn applies_to(&self, kind: GateKind) -> bool;

    /// Replacement sequence for `instruction`, or `UnsupportedOperation` if the
    /// rule does not handle its kind
    fn rewrite(&self, instruction: &Instruction) -> Result<Vec<Instruction>>;
}

/// Rewrite one instruction with whichever rule handles its kind.
///
/// RZ and R have no rule and yield `UnsupportedOperation`; callers keep those
/// instructions unchanged.
pub fn legalize_instruction(instruction: &Instruction) -> Result<Vec<Instruction>> {
    match instruction.kind() {
        GateKind::RX | GateKind::RY => SingleQubitNormalizer.rewrite(instruction),
        GateKind::RXX => TwoQubitNormalizer.rewrite(instruction),
        kind => Err(LegalizeError::UnsupportedOperation(kind)),
    }
}
