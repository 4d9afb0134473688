//! Single-particle kinematics derived from momentum components.
//!
//! These quantities are reporting helpers, not part of the counting core.

use ps_core::{Particle, PDG_PION_MINUS, PDG_PION_PLUS, PDG_PION_ZERO};

/// Momentum magnitude `|p| = sqrt(px² + py² + pz²)`.
#[inline]
pub fn momentum(px: f64, py: f64, pz: f64) -> f64 {
    (px * px + py * py + pz * pz).sqrt()
}

/// Transverse momentum `pT = sqrt(px² + py²)`.
#[inline]
pub fn transverse_momentum(px: f64, py: f64) -> f64 {
    (px * px + py * py).sqrt()
}

/// Pseudorapidity `η = ½·ln((|p| + pz) / (|p| − pz))`.
///
/// Diverges as the particle approaches the beam axis (|p| → ±pz); callers
/// should expect ±∞ there.
#[inline]
pub fn pseudorapidity(p: f64, pz: f64) -> f64 {
    0.5 * ((p + pz) / (p - pz)).ln()
}

/// Azimuthal angle `φ = atan2(py, px)`, in (−π, π].
#[inline]
pub fn azimuthal_angle(px: f64, py: f64) -> f64 {
    py.atan2(px)
}

/// Human-readable species name for the pion PDG codes.
pub fn pdg_name(pdg_code: i64) -> &'static str {
    match pdg_code {
        PDG_PION_PLUS => "pion+",
        PDG_PION_MINUS => "pion-",
        PDG_PION_ZERO => "pion0",
        _ => "not a pion",
    }
}

/// All derived kinematic quantities for one particle.
#[derive(Debug, Clone, Copy)]
pub struct Kinematics {
    /// Momentum magnitude.
    pub p: f64,
    /// Transverse momentum.
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle.
    pub phi: f64,
}

impl Kinematics {
    /// Compute the full set for one particle.
    pub fn of(particle: &Particle) -> Self {
        let p = momentum(particle.px, particle.py, particle.pz);
        Self {
            p,
            pt: transverse_momentum(particle.px, particle.py),
            eta: pseudorapidity(p, particle.pz),
            phi: azimuthal_angle(particle.px, particle.py),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_magnitudes() {
        assert!((momentum(3.0, 4.0, 0.0) - 5.0).abs() < 1e-12);
        assert!((transverse_momentum(3.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn pseudorapidity_is_zero_in_transverse_plane() {
        let p = momentum(1.0, 1.0, 0.0);
        assert!(pseudorapidity(p, 0.0).abs() < 1e-12);
    }

    #[test]
    fn pseudorapidity_diverges_on_beam_axis() {
        let p = momentum(0.0, 0.0, 2.0);
        assert!(pseudorapidity(p, 2.0).is_infinite());
    }

    #[test]
    fn azimuthal_angle_quadrants() {
        assert!((azimuthal_angle(1.0, 0.0)).abs() < 1e-12);
        assert!((azimuthal_angle(0.0, 1.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(azimuthal_angle(-1.0, -1.0) < 0.0);
    }

    #[test]
    fn pdg_names() {
        assert_eq!(pdg_name(211), "pion+");
        assert_eq!(pdg_name(-211), "pion-");
        assert_eq!(pdg_name(111), "pion0");
        assert_eq!(pdg_name(2212), "not a pion");
    }
}
