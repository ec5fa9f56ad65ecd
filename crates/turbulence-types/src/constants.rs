// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Number of co-located lepton species in a pair plasma.
/// `ppc` is given per species, so the effective count doubles.
pub const PAIR_SPECIES: f64 = 2.0;

/// Bulk Lorentz factor of the background plasma (no bulk motion).
pub const BULK_GAMMA: f64 = 1.0;

/// Coefficient in gamma_th = 1 + (3/2) theta.
/// More accurate than 1 + 3 theta near theta ~ 1.
pub const THERMAL_GAMMA_COEFF: f64 = 1.5;

/// Blackbody temperature of the photon species (units of m_e c^2).
pub const PHOTON_TEMPERATURE: f64 = 0.1;

/// Photon charge. Must be exactly zero so photons never deposit current.
pub const PHOTON_CHARGE: f64 = 0.0;

/// Photon mass placeholder.
pub const PHOTON_MASS: f64 = 0.0;

/// Prefactor of the radiative drag amplitude 0.1 B0 / gamma_rad^2.
pub const DRAG_PREFACTOR: f64 = 0.1;

/// Speed-of-light correction factor (disabled).
pub const C_CORR: f64 = 1.0;

/// Background field direction multiplier (parallel, perpendicular, in-plane).
pub const FIELD_DIRECTION: f64 = 1.0;

/// Labels of the simulated lepton species, in species-index order.
pub const PARTICLE_TYPES: [&str; 2] = ["e-", "e+"];

/// Courant limit of the 3D Yee scheme, 1/sqrt(3).
pub const CFL_LIMIT_3D: f64 = 0.577_350_269_189_625_8;

/// Upper bound on particles of one species seeded into a single cell.
pub const MAX_PARTICLES_PER_CELL: f64 = 1.0e6;
