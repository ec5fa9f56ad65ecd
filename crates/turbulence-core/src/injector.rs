//! Cell injector for the initial pair plasma.
//!
//! Positrons are placed on top of the electron they are paired with, so the
//! initial charge density vanishes identically and no initial E field is
//! needed.

use crate::seeding::{density_profile, velocity_profile, weight_profile, CellLocation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use turbulence_math::sampling::MomentumSampler;
use turbulence_types::constants::MAX_PARTICLES_PER_CELL;
use turbulence_types::error::{TurbulenceError, TurbulenceResult};
use turbulence_types::params::{DerivedConfig, Species};

/// Macro-particle handed to the engine at simulation start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeededParticle {
    pub species: Species,
    pub position: [f64; 3],
    /// Four-velocity gamma * beta (units of c).
    pub velocity: [f64; 3],
    pub charge: f64,
    pub mass: f64,
    pub weight: f64,
}

fn particle_count(density: f64, species: Species) -> TurbulenceResult<usize> {
    if !density.is_finite() || density < 0.0 {
        return Err(TurbulenceError::domain(
            "density",
            format!("{species:?} density must be finite and >= 0, got {density}"),
        ));
    }
    if density > MAX_PARTICLES_PER_CELL {
        return Err(TurbulenceError::domain(
            "density",
            format!(
                "{species:?} density {density} exceeds {MAX_PARTICLES_PER_CELL} particles per cell"
            ),
        ));
    }
    Ok(density.floor() as usize)
}

fn make_particle(
    species: Species,
    position: [f64; 3],
    velocity: [f64; 3],
    xloc: CellLocation,
    conf: &DerivedConfig,
) -> SeededParticle {
    SeededParticle {
        species,
        position,
        velocity,
        charge: conf.charge(species),
        mass: conf.mass(species),
        weight: weight_profile(xloc, species.index(), conf),
    }
}

/// Seed the electron-positron pairs of one cell.
///
/// Output is interleaved `[e-, e+, e-, e+, ...]`, `floor(ppc)` pairs.
pub fn inject_cell<S, R>(
    xloc: CellLocation,
    conf: &DerivedConfig,
    sampler: &S,
    rng: &mut R,
) -> TurbulenceResult<Vec<SeededParticle>>
where
    S: MomentumSampler,
    R: Rng + ?Sized,
{
    let electron = Species::Electron;
    let positron = Species::Positron;
    let n_e = particle_count(density_profile(xloc, electron.index(), conf)?, electron)?;
    let n_p = particle_count(density_profile(xloc, positron.index(), conf)?, positron)?;
    let n_pairs = n_e.min(n_p);

    let mut out = Vec::with_capacity(2 * n_pairs);
    for _ in 0..n_pairs {
        let (x_e, u_e) = velocity_profile(xloc, electron.index(), conf, sampler, rng)?;
        // positron position is discarded in favour of its partner's
        let (_, u_p) = velocity_profile(xloc, positron.index(), conf, sampler, rng)?;
        out.push(make_particle(electron, x_e, u_e, xloc, conf));
        out.push(make_particle(positron, x_e, u_p, xloc, conf));
    }
    Ok(out)
}

/// Seed the blackbody photons of one cell (`floor(xpc)` of them).
pub fn inject_photons<S, R>(
    xloc: CellLocation,
    conf: &DerivedConfig,
    sampler: &S,
    rng: &mut R,
) -> TurbulenceResult<Vec<SeededParticle>>
where
    S: MomentumSampler,
    R: Rng + ?Sized,
{
    let photon = Species::Photon;
    let n_x = particle_count(density_profile(xloc, photon.index(), conf)?, photon)?;
    let mut out = Vec::with_capacity(n_x);
    for _ in 0..n_x {
        let (x, u) = velocity_profile(xloc, photon.index(), conf, sampler, rng)?;
        out.push(make_particle(photon, x, u, xloc, conf));
    }
    Ok(out)
}

/// Net charge carried by a set of particles.
pub fn net_charge(particles: &[SeededParticle]) -> f64 {
    particles.iter().map(|p| p.charge * p.weight).sum()
}
