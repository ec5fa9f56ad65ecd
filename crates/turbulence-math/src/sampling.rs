// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Momentum Sampling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Relativistic momentum samplers for particle initialization.
//!
//! Four-velocities `u = gamma * beta` are in units of c. The Maxwell-Juttner
//! sampler uses Box-Muller in the non-relativistic limit and Sobol's
//! rejection method above it, followed by Zenitani's flipping method for the
//! bulk boost along x. Photon energies follow the Planck spectrum via the
//! zeta(3) series decomposition.

use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;
use turbulence_types::error::{TurbulenceError, TurbulenceResult};

/// Riemann zeta(3).
const ZETA_3: f64 = 1.202_056_903_159_594_3;

/// Temperature above which the Sobol rejection method is used.
pub const RELATIVISTIC_THRESHOLD: f64 = 0.2;

/// One sampled four-velocity `(ux, uy, uz)` and its magnitude `u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSample {
    pub ux: f64,
    pub uy: f64,
    pub uz: f64,
    pub u: f64,
}

impl MomentumSample {
    fn from_components(ux: f64, uy: f64, uz: f64) -> Self {
        MomentumSample {
            ux,
            uy,
            uz,
            u: (ux * ux + uy * uy + uz * uz).sqrt(),
        }
    }

    pub fn components(&self) -> [f64; 3] {
        [self.ux, self.uy, self.uz]
    }

    /// Lorentz factor of a massive particle with this four-velocity.
    pub fn lorentz_factor(&self) -> f64 {
        (1.0 + self.u * self.u).sqrt()
    }
}

/// Sign of the bulk drift along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoostDirection {
    #[default]
    Forward,
    Backward,
}

impl BoostDirection {
    pub fn sign(self) -> f64 {
        match self {
            BoostDirection::Forward => 1.0,
            BoostDirection::Backward => -1.0,
        }
    }
}

/// Momentum sampling capability consumed by the particle seeder.
pub trait MomentumSampler {
    /// Draw from a Maxwell-Juttner distribution of temperature `delgam`,
    /// boosted along x.
    ///
    /// `gamma` is the bulk Lorentz factor when `|gamma| >= 1` and the bulk
    /// velocity beta when `|gamma| < 1`; zero means no bulk motion.
    /// `dims` is 2 (in-plane, `uz = 0`) or 3.
    fn sample_boosted_maxwellian<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        delgam: f64,
        gamma: f64,
        direction: BoostDirection,
        dims: usize,
    ) -> TurbulenceResult<MomentumSample>;

    /// Draw an isotropic photon momentum from a blackbody of the given temperature.
    fn sample_blackbody<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        temperature: f64,
    ) -> TurbulenceResult<MomentumSample>;
}

/// Default sampler backing the turbulence setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuttnerSampler {
    pub relativistic_threshold: f64,
}

impl Default for JuttnerSampler {
    fn default() -> Self {
        JuttnerSampler {
            relativistic_threshold: RELATIVISTIC_THRESHOLD,
        }
    }
}

/// Uniform draw on (0, 1], safe to take the logarithm of.
fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.gen::<f64>()
}

fn validate_temperature(value: f64, label: &str) -> TurbulenceResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TurbulenceError::InvalidArgument(format!(
            "{label} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

/// Non-relativistic Maxwellian: each component ~ N(0, theta).
fn sample_maxwellian<R: Rng + ?Sized>(rng: &mut R, theta: f64) -> [f64; 3] {
    let s = theta.sqrt();
    let ux: f64 = rng.sample(StandardNormal);
    let uy: f64 = rng.sample(StandardNormal);
    let uz: f64 = rng.sample(StandardNormal);
    [s * ux, s * uy, s * uz]
}

/// Sobol's rejection method for the isotropic Juttner distribution.
fn sample_juttner_sobol<R: Rng + ?Sized>(rng: &mut R, theta: f64) -> [f64; 3] {
    let u = loop {
        let x1 = open_unit(rng);
        let x2 = open_unit(rng);
        let x3 = open_unit(rng);
        let x4 = open_unit(rng);
        let u = -theta * (x1 * x2 * x3).ln();
        let eta = -theta * (x1 * x2 * x3 * x4).ln();
        if eta * eta - u * u > 1.0 {
            break u;
        }
    };
    let x5 = rng.gen::<f64>();
    let x6 = rng.gen::<f64>();
    let sin_part = 2.0 * u * (x5 * (1.0 - x5)).sqrt();
    [
        u * (2.0 * x5 - 1.0),
        sin_part * (2.0 * PI * x6).cos(),
        sin_part * (2.0 * PI * x6).sin(),
    ]
}

/// Bulk (Lorentz factor, velocity) from the overloaded `gamma` argument.
fn bulk_motion(gamma: f64) -> TurbulenceResult<(f64, f64)> {
    if !gamma.is_finite() {
        return Err(TurbulenceError::InvalidArgument(format!(
            "bulk gamma must be finite, got {gamma}"
        )));
    }
    let g = gamma.abs();
    if g < 1.0 {
        let beta = g;
        Ok((1.0 / (1.0 - beta * beta).sqrt(), beta))
    } else {
        Ok((g, (1.0 - 1.0 / (g * g)).sqrt()))
    }
}

impl MomentumSampler for JuttnerSampler {
    fn sample_boosted_maxwellian<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        delgam: f64,
        gamma: f64,
        direction: BoostDirection,
        dims: usize,
    ) -> TurbulenceResult<MomentumSample> {
        validate_temperature(delgam, "delgam")?;
        if dims != 2 && dims != 3 {
            return Err(TurbulenceError::InvalidArgument(format!(
                "dims must be 2 or 3, got {dims}"
            )));
        }
        let (bulk_gamma, beta) = bulk_motion(gamma)?;

        let [mut ux, uy, mut uz] = if delgam > self.relativistic_threshold {
            sample_juttner_sobol(rng, delgam)
        } else {
            sample_maxwellian(rng, delgam)
        };
        if dims == 2 {
            uz = 0.0;
        }

        if beta > 0.0 {
            let gamma_rest = (1.0 + ux * ux + uy * uy + uz * uz).sqrt();
            let vx = ux / gamma_rest;
            let x7 = rng.gen::<f64>();
            if -beta * vx > x7 {
                ux = -ux;
            }
            ux = bulk_gamma * (ux + beta * gamma_rest);
        }
        ux *= direction.sign();

        Ok(MomentumSample::from_components(ux, uy, uz))
    }

    fn sample_blackbody<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        temperature: f64,
    ) -> TurbulenceResult<MomentumSample> {
        validate_temperature(temperature, "temperature")?;

        // x^2 / (e^x - 1) = sum_j x^2 e^{-jx}: pick term j with weight j^-3 / zeta(3),
        // then x ~ Gamma(3, 1/j).
        let target = rng.gen::<f64>() * ZETA_3;
        let mut partial = 1.0;
        let mut j = 1.0_f64;
        while partial < target {
            j += 1.0;
            partial += j.powi(-3);
        }
        let x = -(open_unit(rng) * open_unit(rng) * open_unit(rng)).ln() / j;
        let energy = temperature * x;

        let mu = 2.0 * rng.gen::<f64>() - 1.0;
        let phi = 2.0 * PI * rng.gen::<f64>();
        let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
        Ok(MomentumSample {
            ux: energy * mu,
            uy: energy * sin_theta * phi.cos(),
            uz: energy * sin_theta * phi.sin(),
            u: energy,
        })
    }
}
