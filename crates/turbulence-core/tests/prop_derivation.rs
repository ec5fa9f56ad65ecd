// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Property-Based Tests (proptest) for turbulence-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the parameter derivation and seeding profiles.
//!
//! Covers: charge symmetry, field selection, temperature ratio, drag
//! presence, determinism, seeding invariants.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use turbulence_core::derivation::{derive, derive_with_profile};
use turbulence_core::seeding::{density_profile, velocity_profile, weight_profile};
use turbulence_math::sampling::JuttnerSampler;
use turbulence_types::config::PrimaryConfig;
use turbulence_types::params::DerivationProfile;

#[allow(clippy::too_many_arguments)]
fn primary(
    n: usize,
    mesh: usize,
    ppc: f64,
    c_omp: f64,
    cfl: f64,
    sigma: f64,
    delgam: f64,
    temp_ratio: f64,
    mi: f64,
    max_mode: f64,
) -> PrimaryConfig {
    PrimaryConfig {
        nx: n,
        ny: n,
        nz: 1,
        nx_mesh: mesh,
        ny_mesh: mesh,
        nz_mesh: mesh,
        ppc,
        npasses: 2,
        c_omp,
        cfl,
        sigma,
        delgam,
        temp_ratio,
        me: -1.0,
        mi,
        max_mode,
        gammarad: None,
        drive_ampl: None,
        drive_freq: None,
        decorr_time: None,
        xpc: None,
        beta: None,
        outdir: None,
        prefix: None,
        postfix: None,
    }
}

prop_compose! {
    fn valid_primary()(
        n in 1usize..16,
        mesh in 1usize..128,
        ppc in 1.0f64..128.0,
        c_omp in 0.5f64..20.0,
        cfl in 0.05f64..1.0,
        sigma in 1e-3f64..100.0,
        delgam in 1e-6f64..5.0,
        temp_ratio in 0.1f64..10.0,
        mi in 1.0f64..1836.0,
        max_mode in 1.0f64..16.0,
    ) -> PrimaryConfig {
        primary(n, mesh, ppc, c_omp, cfl, sigma, delgam, temp_ratio, mi, max_mode)
    }
}

// ── Derivation Invariants ────────────────────────────────────────────

proptest! {
    /// qe = -qi and B0 is the thermal definition.
    #[test]
    fn charge_symmetry_and_field_choice(p in valid_primary()) {
        let conf = derive(&p).unwrap();
        prop_assert_eq!(conf.qe, -conf.qi);
        prop_assert!(conf.qe < 0.0);
        prop_assert_eq!(conf.binit, conf.binit_approx);
        prop_assert_eq!(conf.e_norm, conf.binit);
        prop_assert_eq!(conf.b_norm, conf.binit);
    }

    /// Species labels and photon placeholders are always present.
    #[test]
    fn fixed_species_layout(p in valid_primary()) {
        let conf = derive(&p).unwrap();
        prop_assert_eq!(conf.prtcl_types.len(), 2);
        prop_assert_eq!(conf.prtcl_types[0].as_str(), "e-");
        prop_assert_eq!(conf.prtcl_types[1].as_str(), "e+");
        prop_assert_eq!(conf.qp, 0.0);
        prop_assert_eq!(conf.mp, 0.0);
        prop_assert_eq!(conf.delgam_x, 0.1);
    }

    /// Ion temperature is the electron temperature times temp_ratio.
    #[test]
    fn temperature_ratio(p in valid_primary()) {
        let conf = derive(&p).unwrap();
        prop_assert_eq!(conf.delgam_e, p.delgam);
        prop_assert_eq!(conf.delgam_i, p.temp_ratio * conf.delgam_e);
    }

    /// Rescaled masses keep the input mass ratio.
    #[test]
    fn mass_ratio_preserved(p in valid_primary()) {
        let conf = derive(&p).unwrap();
        let ratio = conf.mi / conf.me;
        prop_assert!((ratio - p.mi.abs() / p.me.abs()).abs() <= 1e-12 * ratio);
    }

    /// Derivation is a pure function of the primary inputs.
    #[test]
    fn derivation_deterministic(p in valid_primary()) {
        let a = derive(&p).unwrap();
        let b = derive(&p.clone()).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Drag exists exactly when gammarad is present and nonzero.
    #[test]
    fn drag_presence(
        p in valid_primary(),
        gammarad in prop_oneof![
            Just(None::<f64>),
            Just(Some(0.0)),
            (1.0f64..1000.0).prop_map(Some),
        ],
        drive_ampl in 0.1f64..2.0,
    ) {
        let mut p = p;
        p.gammarad = gammarad;
        p.drive_ampl = Some(drive_ampl);
        let (conf, diag) = derive_with_profile(&p, DerivationProfile::default()).unwrap();
        match gammarad {
            Some(g) if g != 0.0 => {
                let drag = conf.drag_amplitude.unwrap();
                prop_assert_eq!(drag, 0.1 * conf.binit / g.powi(2));
                prop_assert!(diag.rad_a.is_some());
            }
            _ => {
                prop_assert!(conf.drag_amplitude.is_none());
                prop_assert!(diag.rad_a.is_none());
            }
        }
    }

    /// Physical extents follow tiles x cells.
    #[test]
    fn domain_extent(p in valid_primary()) {
        let conf = derive(&p).unwrap();
        prop_assert_eq!(conf.lx, (p.nx * p.nx_mesh) as f64);
        prop_assert_eq!(conf.ly, (p.ny * p.ny_mesh) as f64);
        prop_assert_eq!(conf.lz, (p.nz * p.nz_mesh) as f64);
        prop_assert!(conf.p_norm >= 1.0);
        prop_assert!(conf.t0 > 0.0 && conf.t0.is_finite());
    }
}

// ── Seeding Invariants ───────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Lepton density is ppc everywhere, weight is 1 everywhere.
    #[test]
    fn uniform_density_and_weight(
        p in valid_primary(),
        x in -100i64..100,
        y in -100i64..100,
        z in -100i64..100,
    ) {
        let conf = derive(&p).unwrap();
        for ispcs in 0..2 {
            prop_assert_eq!(density_profile([x, y, z], ispcs, &conf).unwrap(), p.ppc);
        }
        for ispcs in 0..3 {
            prop_assert_eq!(weight_profile([x, y, z], ispcs, &conf), 1.0);
        }
    }

    /// Jittered positions stay inside the seeded cell.
    #[test]
    fn jitter_inside_cell(
        p in valid_primary(),
        seed in any::<u64>(),
        ispcs in 0usize..3,
    ) {
        let conf = derive(&p).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let xloc = [3, 4, 5];
        let (x, u) = velocity_profile(xloc, ispcs, &conf, &JuttnerSampler::default(), &mut rng)
            .unwrap();
        for d in 0..3 {
            let offset = x[d] - xloc[d] as f64;
            prop_assert!((0.0..1.0).contains(&offset));
            prop_assert!(u[d].is_finite());
        }
    }
}
