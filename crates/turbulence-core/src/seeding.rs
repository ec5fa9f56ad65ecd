// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Particle Seeding Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-cell seeding callbacks.
//!
//! Cells span `xloc .. xloc + 1` in every dimension (dx = 1). The callbacks
//! hold no state; randomness comes from the caller's generator, so each
//! worker thread can seed with its own RNG against a shared `&DerivedConfig`.

use rand::Rng;
use turbulence_math::sampling::{BoostDirection, MomentumSampler};
use turbulence_types::error::{TurbulenceError, TurbulenceResult};
use turbulence_types::params::{DerivedConfig, Species};

/// Cell index of the lower corner of a grid cell.
pub type CellLocation = [i64; 3];

/// Number of velocity-space dimensions sampled for leptons.
const VELOCITY_DIMS: usize = 3;

/// Seeded particle position and four-velocity for species `ispcs` in cell `xloc`.
///
/// The position is jittered uniformly inside the cell. Leptons draw from an
/// unboosted Maxwell-Juttner distribution at their species temperature;
/// photons draw from a blackbody at `delgam_x`.
pub fn velocity_profile<S, R>(
    xloc: CellLocation,
    ispcs: usize,
    conf: &DerivedConfig,
    sampler: &S,
    rng: &mut R,
) -> TurbulenceResult<([f64; 3], [f64; 3])>
where
    S: MomentumSampler,
    R: Rng + ?Sized,
{
    let species = Species::try_from(ispcs)?;
    let delgam = conf.thermal_spread(species);

    let x0 = [
        xloc[0] as f64 + rng.gen::<f64>(),
        xloc[1] as f64 + rng.gen::<f64>(),
        xloc[2] as f64 + rng.gen::<f64>(),
    ];

    let sample = if species.is_lepton() {
        // no bulk motion
        sampler.sample_boosted_maxwellian(
            rng,
            delgam,
            0.0,
            BoostDirection::Forward,
            VELOCITY_DIMS,
        )?
    } else {
        sampler.sample_blackbody(rng, delgam)?
    };

    Ok((x0, sample.components()))
}

/// Number of particles of species `ispcs` to add to cell `xloc`.
///
/// Density is uniform: the plasma frequency is already normalized to
/// `ppc`, so leptons always return `ppc`. Photons return `xpc`.
pub fn density_profile(
    _xloc: CellLocation,
    ispcs: usize,
    conf: &DerivedConfig,
) -> TurbulenceResult<f64> {
    match Species::try_from(ispcs)? {
        Species::Electron | Species::Positron => Ok(conf.primary.ppc),
        Species::Photon => conf.primary.xpc.ok_or(TurbulenceError::MissingField("xpc")),
    }
}

/// Statistical weight of a particle added to cell `xloc`.
pub fn weight_profile(_xloc: CellLocation, _ispcs: usize, _conf: &DerivedConfig) -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::derive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use turbulence_math::sampling::{JuttnerSampler, MomentumSample};
    use turbulence_math::stats::{ks_critical_value, ks_statistic_uniform, mean_std};
    use turbulence_types::config::PrimaryConfig;

    fn test_conf() -> DerivedConfig {
        let primary = PrimaryConfig {
            nx: 2,
            ny: 2,
            nz: 1,
            nx_mesh: 16,
            ny_mesh: 16,
            nz_mesh: 16,
            ppc: 4.0,
            npasses: 1,
            c_omp: 10.0,
            cfl: 0.45,
            sigma: 1.0,
            delgam: 1e-4,
            temp_ratio: 2.0,
            me: -1.0,
            mi: 1.0,
            max_mode: 2.0,
            gammarad: None,
            drive_ampl: None,
            drive_freq: None,
            decorr_time: None,
            xpc: None,
            beta: None,
            outdir: None,
            prefix: None,
            postfix: None,
        };
        derive(&primary).unwrap()
    }

    /// Records the temperature it was asked for and returns it as ux.
    struct EchoSampler;

    impl MomentumSampler for EchoSampler {
        fn sample_boosted_maxwellian<R: Rng + ?Sized>(
            &self,
            _rng: &mut R,
            delgam: f64,
            gamma: f64,
            direction: BoostDirection,
            dims: usize,
        ) -> TurbulenceResult<MomentumSample> {
            assert_eq!(gamma, 0.0);
            assert_eq!(direction, BoostDirection::Forward);
            assert_eq!(dims, 3);
            Ok(MomentumSample {
                ux: delgam,
                uy: 0.0,
                uz: 0.0,
                u: delgam,
            })
        }

        fn sample_blackbody<R: Rng + ?Sized>(
            &self,
            _rng: &mut R,
            temperature: f64,
        ) -> TurbulenceResult<MomentumSample> {
            Ok(MomentumSample {
                ux: -temperature,
                uy: 0.0,
                uz: 0.0,
                u: temperature,
            })
        }
    }

    #[test]
    fn test_species_select_temperature_and_sampler() {
        let conf = test_conf();
        let mut rng = StdRng::seed_from_u64(1);
        let (_, u_e) = velocity_profile([0, 0, 0], 0, &conf, &EchoSampler, &mut rng).unwrap();
        let (_, u_p) = velocity_profile([0, 0, 0], 1, &conf, &EchoSampler, &mut rng).unwrap();
        let (_, u_x) = velocity_profile([0, 0, 0], 2, &conf, &EchoSampler, &mut rng).unwrap();
        assert_eq!(u_e[0], conf.delgam_e);
        assert_eq!(u_p[0], conf.delgam_i);
        assert_eq!(u_p[0], 2.0 * conf.delgam_e);
        // photons go through the blackbody sampler
        assert_eq!(u_x[0], -conf.delgam_x);
    }

    #[test]
    fn test_invalid_species_rejected() {
        let conf = test_conf();
        let mut rng = StdRng::seed_from_u64(1);
        for ispcs in [3usize, 7, 100] {
            let sampler = JuttnerSampler::default();
            let err = velocity_profile([0, 0, 0], ispcs, &conf, &sampler, &mut rng).unwrap_err();
            assert!(matches!(err, TurbulenceError::InvalidSpecies(i) if i == ispcs));
            let err = density_profile([0, 0, 0], ispcs, &conf).unwrap_err();
            assert!(matches!(err, TurbulenceError::InvalidSpecies(i) if i == ispcs));
        }
    }

    #[test]
    fn test_position_inside_cell() {
        let conf = test_conf();
        let sampler = JuttnerSampler::default();
        let mut rng = StdRng::seed_from_u64(99);
        let xloc = [5, -3, 12];
        for ispcs in 0..3 {
            for _ in 0..500 {
                let (x, u) = velocity_profile(xloc, ispcs, &conf, &sampler, &mut rng).unwrap();
                for d in 0..3 {
                    let offset = x[d] - xloc[d] as f64;
                    assert!((0.0..1.0).contains(&offset), "offset {offset} out of cell");
                    assert!(u[d].is_finite());
                }
            }
        }
    }

    #[test]
    fn test_position_jitter_uniform_ks() {
        let conf = test_conf();
        let sampler = JuttnerSampler::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let xloc = [7, 0, 0];
        let n = 10_000;
        let offsets: Vec<f64> = (0..n)
            .map(|_| {
                let (x, _) = velocity_profile(xloc, 0, &conf, &sampler, &mut rng).unwrap();
                x[0] - xloc[0] as f64
            })
            .collect();
        let d = ks_statistic_uniform(&offsets);
        assert!(d < ks_critical_value(n, 0.001), "KS D={d}");

        // U(0,1): mean 1/2, std 1/sqrt(12)
        let (mean, std) = mean_std(&offsets);
        assert!((mean - 0.5).abs() < 0.015, "mean={mean}");
        assert!((std - 12f64.sqrt().recip()).abs() < 0.01, "std={std}");
    }

    #[test]
    fn test_density_profile() {
        let mut conf = test_conf();
        for xloc in [[0, 0, 0], [31, 17, 4], [-1, 2, 9]] {
            assert_eq!(density_profile(xloc, 0, &conf).unwrap(), conf.primary.ppc);
            assert_eq!(density_profile(xloc, 1, &conf).unwrap(), conf.primary.ppc);
        }
        let err = density_profile([0, 0, 0], 2, &conf).unwrap_err();
        assert!(matches!(err, TurbulenceError::MissingField("xpc")));

        conf.primary.xpc = Some(2.0);
        assert_eq!(density_profile([0, 0, 0], 2, &conf).unwrap(), 2.0);
    }

    #[test]
    fn test_weight_profile_uniform() {
        let conf = test_conf();
        for ispcs in 0..3 {
            assert_eq!(weight_profile([3, 4, 5], ispcs, &conf), 1.0);
        }
    }

    #[test]
    fn test_photon_species_is_neutral() {
        let conf = test_conf();
        assert_eq!(conf.charge(Species::Photon), 0.0);
        assert_eq!(conf.qp, 0.0);
    }

    #[test]
    fn test_concurrent_seeding_with_thread_local_rngs() {
        let conf = test_conf();
        let sampler = JuttnerSampler::default();
        let results: Vec<Vec<[f64; 3]>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4u64)
                .map(|worker| {
                    let conf = &conf;
                    let sampler = &sampler;
                    scope.spawn(move || {
                        let mut rng = StdRng::seed_from_u64(worker);
                        (0..100)
                            .map(|_| {
                                velocity_profile([0, 0, 0], 1, conf, sampler, &mut rng)
                                    .unwrap()
                                    .0
                            })
                            .collect::<Vec<[f64; 3]>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // per-thread seeding is reproducible
        let mut rng = StdRng::seed_from_u64(2);
        let replay: Vec<[f64; 3]> = (0..100)
            .map(|_| velocity_profile([0, 0, 0], 1, &conf, &sampler, &mut rng).unwrap().0)
            .collect();
        assert_eq!(results[2], replay);
    }
}
