//! Particle classification by PDG code.

use ps_core::{PDG_PION_MINUS, PDG_PION_PLUS};

/// Signed category of a particle for the counting analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// Positive pion (PDG 211); counts toward the positive total.
    Positive,
    /// Negative pion (PDG −211); counts toward the negative total.
    Negative,
    /// Anything else; excluded from both counters.
    Other,
}

impl Charge {
    /// Classify a PDG code by exact equality against the two pion sentinels.
    pub fn from_pdg(pdg_code: i64) -> Self {
        match pdg_code {
            PDG_PION_PLUS => Charge::Positive,
            PDG_PION_MINUS => Charge::Negative,
            _ => Charge::Other,
        }
    }
}
