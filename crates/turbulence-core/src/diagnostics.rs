//! Log summary of a finished derivation.
//!
//! Purely observational: nothing here feeds back into the derived record.

use crate::derivation::DerivationDiagnostics;
use log::Level;
use turbulence_types::constants::CFL_LIMIT_3D;
use turbulence_types::params::DerivedConfig;

/// theta above which 1 + 3/2 theta underestimates the thermal Lorentz factor.
const ULTRA_RELATIVISTIC_THETA: f64 = 1.0;

pub(crate) fn log_derivation(conf: &DerivedConfig, diag: &DerivationDiagnostics, verbose: bool) {
    let level = if verbose { Level::Info } else { Level::Debug };
    let p = &conf.primary;

    if p.cfl > CFL_LIMIT_3D && p.nz * p.nz_mesh > 1 {
        log::warn!(
            "cfl = {} exceeds the 3D Courant limit {:.4}",
            p.cfl,
            CFL_LIMIT_3D
        );
    }
    if conf.delgam_e > ULTRA_RELATIVISTIC_THETA || conf.delgam_i > ULTRA_RELATIVISTIC_THETA {
        log::warn!(
            "ultra-relativistic theta_e={}, theta_i={}; gamma_th = 1 + 1.5 theta is approximate",
            conf.delgam_e,
            conf.delgam_i
        );
    }

    if !log::log_enabled!(level) {
        return;
    }

    log::log!(
        level,
        "turbulence setup: {}x{}x{} tiles of {}x{}x{} cells",
        p.nx,
        p.ny,
        p.nz,
        p.nx_mesh,
        p.ny_mesh,
        p.nz_mesh
    );
    log::log!(
        level,
        "thermal spread e-: {}  e+: {}",
        conf.delgam_e,
        conf.delgam_i
    );
    log::log!(level, "Alfven velocity: {}", diag.alfven_velocity);
    log::log!(
        level,
        "ion beta: {}  electron beta: {}",
        diag.ion_beta,
        diag.electron_beta
    );

    log::log!(level, "sigma: {}", p.sigma);
    log::log!(level, "mass term: {}", diag.mass_term);
    log::log!(level, "gamma_th: {}", conf.gammath);
    log::log!(
        level,
        "B0 cold: {}  approx: {}  used: {}",
        conf.binit_nc,
        conf.binit_approx,
        conf.binit
    );

    log::log!(level, "driving scale l0: {}", conf.l0);
    log::log!(level, "thermal Larmor radius: {}", diag.lth);
    log::log!(level, "post-reconnection Larmor radius: {}", diag.lsig);
    log::log!(level, "max gamma g0: {}", conf.g0);

    if let (Some(drag), Some(gammarad)) = (conf.drag_amplitude, p.gammarad) {
        log::log!(level, "radiative drag amplitude {drag} with gamma_rad {gammarad}");
        if let Some(a) = diag.rad_a {
            log::log!(level, "radiative A: {a}");
        }
    }

    if let (Some(ampl), Some(w0), Some(g0)) = (p.drive_ampl, p.drive_freq, p.decorr_time) {
        log::log!(
            level,
            "Langevin antenna: ampl={ampl} w0={w0} gamma0={g0} t0={} laps",
            conf.t0
        );
    }
    log::log!(
        level,
        "normalization e={} b={} j={} p={}",
        conf.e_norm,
        conf.b_norm,
        conf.j_norm,
        conf.p_norm
    );
}
