// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Parameter Derivation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Primary inputs to normalized pair-plasma simulation parameters.
//!
//! The chain below is order sensitive: masses are rescaled into charge units
//! right after the charges are fixed, and every later quantity (field
//! strength, drag, normalizations) reads the rescaled masses.

use crate::diagnostics::log_derivation;
use turbulence_types::config::PrimaryConfig;
use turbulence_types::constants::{
    BULK_GAMMA, C_CORR, DRAG_PREFACTOR, FIELD_DIRECTION, PAIR_SPECIES, PARTICLE_TYPES,
    PHOTON_CHARGE, PHOTON_MASS, PHOTON_TEMPERATURE, THERMAL_GAMMA_COEFF,
};
use turbulence_types::error::{TurbulenceError, TurbulenceResult};
use turbulence_types::params::{DerivationProfile, DerivedConfig, FieldDefinition};

/// Intermediate quantities that are reported but not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationDiagnostics {
    /// sqrt(sigma / (1 + sigma)).
    pub alfven_velocity: f64,
    pub ion_beta: f64,
    pub electron_beta: f64,
    /// sqrt(m_i + m_e) in charge units.
    pub mass_term: f64,
    /// Thermal Larmor radius in skin depths.
    pub lth: f64,
    /// Larmor radius after reconnection heating (gamma ~ sigma).
    pub lsig: f64,
    /// sigma * drive_ampl^2, radiative runs only.
    pub sigma_perp: Option<f64>,
    /// Radiative drag strength A = 0.1 g0 / gamma_rad^2.
    pub rad_a: Option<f64>,
}

fn checked(value: f64, quantity: &'static str) -> TurbulenceResult<f64> {
    if !value.is_finite() {
        return Err(TurbulenceError::domain(
            quantity,
            format!("{quantity} became non-finite ({value})"),
        ));
    }
    Ok(value)
}

/// Derive the turbulence parameter set with the default profile.
pub fn derive(primary: &PrimaryConfig) -> TurbulenceResult<DerivedConfig> {
    derive_with_profile(primary, DerivationProfile::default()).map(|(conf, _)| conf)
}

/// Derive the parameter set under an explicit profile, returning the
/// diagnostic quantities alongside.
///
/// Fails before producing anything if a precondition is violated or an
/// intermediate value turns non-finite.
pub fn derive_with_profile(
    primary: &PrimaryConfig,
    profile: DerivationProfile,
) -> TurbulenceResult<(DerivedConfig, DerivationDiagnostics)> {
    primary.validate()?;

    // advanced functionality stays off
    let use_injector = false;
    let c_corr = C_CORR;
    let use_maxwell_split = profile.use_maxwell_split;

    let mut me = primary.me.abs();
    let mut mi = primary.mi.abs();
    let cfl = primary.cfl;
    let ppc = primary.ppc * PAIR_SPECIES;

    // plasma frequency fixes the charge
    let gamma = BULK_GAMMA;
    let omp = checked(cfl / primary.c_omp, "omp")?;
    let qe = checked(
        -(omp.powi(2) * gamma) / ((ppc * 0.5) * (1.0 + me / mi)),
        "qe",
    )?;
    let qi = -qe;

    me *= qi.abs();
    mi *= qi.abs();

    let delgam_e = primary.delgam;
    let delgam_i = primary.temp_ratio * delgam_e;

    let qp = PHOTON_CHARGE;
    let mp = PHOTON_MASS;
    let delgam_x = PHOTON_TEMPERATURE;
    let prtcl_types = PARTICLE_TYPES.map(String::from);

    // competing sigma -> B0 definitions
    let sigma = primary.sigma;
    let binit_nc = checked((ppc * cfl.powi(2) * sigma * me).sqrt(), "binit_nc")?;
    let gammath = 1.0 + THERMAL_GAMMA_COEFF * delgam_e;
    let binit_approx = checked(
        (gammath * ppc * me * cfl.powi(2) * sigma).sqrt(),
        "binit_approx",
    )?;
    let binit = match profile.field_definition {
        FieldDefinition::Cold => binit_nc,
        FieldDefinition::ThermalApprox => binit_approx,
        FieldDefinition::Reduced => checked(
            (gamma * ppc * 0.5 * cfl.powi(2) * (me * (1.0 + me / mi)) * sigma).sqrt(),
            "binit",
        )?,
    };

    let [lx_cells, ly_cells, lz_cells] = primary.domain_extent();

    // forcing scale in skin depths
    let l0 = checked(lx_cells as f64 / primary.max_mode / primary.c_omp, "l0")?;
    let lth = gammath / sigma.sqrt() * gammath.sqrt();
    let lsig = sigma / sigma.sqrt() * gammath.sqrt();
    // gyro-resonance with the largest eddy bounds the attainable energy
    let mut g0 = checked(l0 * sigma.sqrt() * gammath.sqrt(), "g0")?;

    let bpar = FIELD_DIRECTION;
    let bperp = FIELD_DIRECTION;
    let bplan = FIELD_DIRECTION;

    let (bx_ext, by_ext, bz_ext, ex_ext, ey_ext, ez_ext) = if use_maxwell_split {
        let beta = primary.beta.ok_or(TurbulenceError::MissingField("beta"))?;
        (
            binit * bpar,
            binit * bplan,
            binit * bperp,
            0.0,
            -beta * binit * bperp,
            beta * binit * bplan,
        )
    } else {
        (0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    };

    let mut drag_amplitude = None;
    let mut sigma_perp = None;
    let mut rad_a = None;
    if let Some(gammarad) = primary.gammarad.filter(|g| *g != 0.0) {
        drag_amplitude = Some(checked(
            DRAG_PREFACTOR * binit / gammarad.powi(2),
            "drag_amplitude",
        )?);

        let drive_ampl = primary
            .drive_ampl
            .ok_or(TurbulenceError::MissingField("drive_ampl"))?;
        let s_perp = sigma * drive_ampl.powi(2);
        g0 = checked(l0 * s_perp.sqrt() * gammath.sqrt(), "g0")?;
        sigma_perp = Some(s_perp);
        rad_a = Some(DRAG_PREFACTOR * g0 / gammarad.powi(2));
    }

    // antenna time unit: inverse light-crossing time of l0, in laps
    let t0 = checked(1.0 / (lx_cells as f64 / cfl / primary.max_mode), "t0")?;

    let e_norm = binit;
    let b_norm = binit;
    let j_norm = checked(qe.abs() * ppc * cfl.powi(2), "j_norm")?;
    let p_norm = ppc.max(1.0);

    let mass_ratio = mi / me;
    let diagnostics = DerivationDiagnostics {
        alfven_velocity: (sigma / (1.0 + sigma)).sqrt(),
        ion_beta: 2.0 * delgam_i / (sigma * (mass_ratio + 1.0) / mass_ratio),
        electron_beta: 2.0 * delgam_e / (sigma * (mass_ratio + 1.0)),
        mass_term: (mi + me).sqrt(),
        lth,
        lsig,
        sigma_perp,
        rad_a,
    };

    let conf = DerivedConfig {
        primary: primary.clone(),
        use_injector,
        c_corr,
        use_maxwell_split,
        gamma,
        omp,
        qe,
        qi,
        me,
        mi,
        delgam_e,
        delgam_i,
        delgam_x,
        qp,
        mp,
        prtcl_types,
        binit_nc,
        gammath,
        binit_approx,
        binit,
        l0,
        g0,
        bpar,
        bperp,
        bplan,
        lx: lx_cells as f64,
        ly: ly_cells as f64,
        lz: lz_cells as f64,
        bx_ext,
        by_ext,
        bz_ext,
        ex_ext,
        ey_ext,
        ez_ext,
        drag_amplitude,
        t0,
        e_norm,
        b_norm,
        j_norm,
        p_norm,
    };

    log_derivation(&conf, &diagnostics, profile.verbose);
    Ok((conf, diagnostics))
}
