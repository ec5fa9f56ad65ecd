// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{TurbulenceError, TurbulenceResult};
use serde::{Deserialize, Serialize};

/// Primary (user-supplied) inputs of a decaying/driven turbulence run.
/// Field names on disk follow the simulation's config decks (`Nx`, `NxMesh`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryConfig {
    /// Number of tiles along x.
    #[serde(rename = "Nx")]
    pub nx: usize,
    #[serde(rename = "Ny")]
    pub ny: usize,
    #[serde(rename = "Nz")]
    pub nz: usize,
    /// Cells per tile along x.
    #[serde(rename = "NxMesh")]
    pub nx_mesh: usize,
    #[serde(rename = "NyMesh")]
    pub ny_mesh: usize,
    #[serde(rename = "NzMesh")]
    pub nz_mesh: usize,

    /// Particles per cell per species.
    pub ppc: f64,
    /// Current filter passes.
    pub npasses: usize,
    /// Skin depth resolution (cells per c/omega_p).
    pub c_omp: f64,
    /// Courant number.
    pub cfl: f64,

    /// Magnetization.
    pub sigma: f64,
    /// Electron temperature theta_e = kT_e / m_e c^2.
    pub delgam: f64,
    /// T_i / T_e.
    pub temp_ratio: f64,
    pub me: f64,
    pub mi: f64,

    /// Driving scale divisor: l_0 = L_x / max_mode.
    pub max_mode: f64,

    /// Radiative drag Lorentz factor. Absent or zero disables drag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gammarad: Option<f64>,
    /// Langevin antenna amplitude (delta B / B_0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_ampl: Option<f64>,
    /// Langevin antenna frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_freq: Option<f64>,
    /// Langevin antenna decorrelation rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorr_time: Option<f64>,

    /// Photons per cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpc: Option<f64>,
    /// Drift velocity used by the split-field external E x B background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
}

fn require_finite(value: f64, name: &'static str) -> TurbulenceResult<()> {
    if !value.is_finite() {
        return Err(TurbulenceError::domain(
            name,
            format!("{name} must be finite, got {value}"),
        ));
    }
    Ok(())
}

fn require_positive(value: f64, name: &'static str) -> TurbulenceResult<()> {
    require_finite(value, name)?;
    if value <= 0.0 {
        return Err(TurbulenceError::domain(
            name,
            format!("{name} must be > 0, got {value}"),
        ));
    }
    Ok(())
}

fn require_nonzero(value: f64, name: &'static str) -> TurbulenceResult<()> {
    require_finite(value, name)?;
    if value == 0.0 {
        return Err(TurbulenceError::domain(name, format!("{name} must be nonzero")));
    }
    Ok(())
}

impl PrimaryConfig {
    /// Load from a JSON config deck.
    pub fn from_file(path: &str) -> TurbulenceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> TurbulenceResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config)
    }

    /// Total cells along x, y, z (tiles times cells per tile).
    ///
    /// Call on a validated deck; `validate` rejects products that overflow.
    pub fn domain_extent(&self) -> [usize; 3] {
        [
            self.nx * self.nx_mesh,
            self.ny * self.ny_mesh,
            self.nz * self.nz_mesh,
        ]
    }

    /// Radiative drag is active only for a present, nonzero `gammarad`.
    pub fn radiative_drag_enabled(&self) -> bool {
        matches!(self.gammarad, Some(g) if g != 0.0)
    }

    /// Check every precondition the parameter derivation relies on.
    ///
    /// Rejects inputs that would otherwise surface as NaN/Inf: zero ion mass,
    /// zero skin depth, zero driving mode count, non-positive magnetization
    /// (`1/sqrt(sigma)`) and a zero Courant number.
    pub fn validate(&self) -> TurbulenceResult<()> {
        let grid = [
            (self.nx, "Nx"),
            (self.ny, "Ny"),
            (self.nz, "Nz"),
            (self.nx_mesh, "NxMesh"),
            (self.ny_mesh, "NyMesh"),
            (self.nz_mesh, "NzMesh"),
        ];
        for (n, name) in grid {
            if n == 0 {
                return Err(TurbulenceError::Config(format!("{name} must be >= 1")));
            }
        }
        let axes = [
            (self.nx, self.nx_mesh, "x"),
            (self.ny, self.ny_mesh, "y"),
            (self.nz, self.nz_mesh, "z"),
        ];
        for (tiles, cells, axis) in axes {
            if tiles.checked_mul(cells).is_none() {
                return Err(TurbulenceError::Config(format!(
                    "grid extent along {axis} overflows: {tiles} tiles x {cells} cells"
                )));
            }
        }

        require_positive(self.ppc, "ppc")?;
        require_positive(self.c_omp, "c_omp")?;
        require_positive(self.cfl, "cfl")?;
        if self.cfl > 1.0 {
            return Err(TurbulenceError::domain(
                "cfl",
                format!("cfl must be in (0, 1], got {}", self.cfl),
            ));
        }
        require_positive(self.sigma, "sigma")?;
        require_positive(self.delgam, "delgam")?;
        require_positive(self.temp_ratio, "temp_ratio")?;
        require_nonzero(self.me, "me")?;
        require_nonzero(self.mi, "mi")?;
        require_positive(self.max_mode, "max_mode")?;

        let optional = [
            (self.gammarad, "gammarad"),
            (self.drive_ampl, "drive_ampl"),
            (self.drive_freq, "drive_freq"),
            (self.decorr_time, "decorr_time"),
            (self.beta, "beta"),
        ];
        for (value, name) in optional {
            if let Some(v) = value {
                require_finite(v, name)?;
            }
        }
        if let Some(xpc) = self.xpc {
            if !xpc.is_finite() || xpc < 0.0 {
                return Err(TurbulenceError::domain(
                    "xpc",
                    format!("xpc must be finite and >= 0, got {xpc}"),
                ));
            }
        }
        Ok(())
    }
}
