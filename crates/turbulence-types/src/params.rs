// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Derived Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::config::PrimaryConfig;
use crate::error::TurbulenceError;
use serde::{Deserialize, Serialize};

/// Particle species index as used by the seeding callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Electron = 0,
    Positron = 1,
    Photon = 2,
}

impl Species {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Leptons carry charge and are seeded from a Maxwell-Juttner distribution.
    pub fn is_lepton(self) -> bool {
        matches!(self, Species::Electron | Species::Positron)
    }
}

impl TryFrom<usize> for Species {
    type Error = TurbulenceError;

    fn try_from(ispcs: usize) -> Result<Self, Self::Error> {
        match ispcs {
            0 => Ok(Species::Electron),
            1 => Ok(Species::Positron),
            2 => Ok(Species::Photon),
            other => Err(TurbulenceError::InvalidSpecies(other)),
        }
    }
}

/// Which of the competing sigma-to-B0 definitions is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldDefinition {
    /// Cold plasma: B0 = sqrt(ppc cfl^2 sigma m_e).
    Cold,
    /// Thermal enthalpy correction with gamma_th = 1 + 3/2 theta.
    #[default]
    ThermalApprox,
    /// Reduced-mass form: B0 = sqrt(gamma ppc/2 cfl^2 m_e (1 + m_e/m_i) sigma).
    Reduced,
}

/// Options selecting alternate derivation branches.
///
/// The default is the turbulence profile: no split external fields and the
/// thermal B0 definition. The other branches stay reachable for future decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivationProfile {
    /// Move the background field into the pusher as an external E/B field.
    pub use_maxwell_split: bool,
    pub field_definition: FieldDefinition,
    /// Emit the derivation summary at info level instead of debug.
    pub verbose: bool,
}

/// Fully derived, immutable simulation parameters.
///
/// Built once from a [`PrimaryConfig`]; downstream readers treat it as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedConfig {
    pub primary: PrimaryConfig,

    // fixed switches
    pub use_injector: bool,
    pub c_corr: f64,
    pub use_maxwell_split: bool,

    // plasma normalization
    pub gamma: f64,
    pub omp: f64,
    pub qe: f64,
    pub qi: f64,
    /// Electron mass in charge units, |me| * |qi|.
    pub me: f64,
    /// Ion (positron) mass in charge units, |mi| * |qi|.
    pub mi: f64,

    // temperatures
    pub delgam_e: f64,
    pub delgam_i: f64,
    pub delgam_x: f64,

    // photons
    pub qp: f64,
    pub mp: f64,

    pub prtcl_types: [String; 2],

    // magnetic field candidates
    pub binit_nc: f64,
    pub gammath: f64,
    pub binit_approx: f64,
    pub binit: f64,

    // driving scales
    pub l0: f64,
    pub g0: f64,

    pub bpar: f64,
    pub bperp: f64,
    pub bplan: f64,

    #[serde(rename = "Lx")]
    pub lx: f64,
    #[serde(rename = "Ly")]
    pub ly: f64,
    #[serde(rename = "Lz")]
    pub lz: f64,

    pub bx_ext: f64,
    pub by_ext: f64,
    pub bz_ext: f64,
    pub ex_ext: f64,
    pub ey_ext: f64,
    pub ez_ext: f64,

    /// Present only when radiative drag is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_amplitude: Option<f64>,

    /// Antenna time unit (inverse light-crossing time of the driving scale, in steps).
    pub t0: f64,

    pub e_norm: f64,
    pub b_norm: f64,
    pub j_norm: f64,
    pub p_norm: f64,
}

impl DerivedConfig {
    /// Thermal spread of a species.
    pub fn thermal_spread(&self, species: Species) -> f64 {
        match species {
            Species::Electron => self.delgam_e,
            Species::Positron => self.delgam_i,
            Species::Photon => self.delgam_x,
        }
    }

    /// Charge of a species in code units.
    pub fn charge(&self, species: Species) -> f64 {
        match species {
            Species::Electron => self.qe,
            Species::Positron => self.qi,
            Species::Photon => self.qp,
        }
    }

    /// Mass of a species in code units.
    pub fn mass(&self, species: Species) -> f64 {
        match species {
            Species::Electron => self.me,
            Species::Positron => self.mi,
            Species::Photon => self.mp,
        }
    }

    /// Effective particles per cell summed over both lepton species.
    pub fn ppc_total(&self) -> f64 {
        self.primary.ppc * crate::constants::PAIR_SPECIES
    }
}
