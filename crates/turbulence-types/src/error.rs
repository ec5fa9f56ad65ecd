// ─────────────────────────────────────────────────────────────────────
// PIC Turbulence Setup — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurbulenceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration field: {0}")]
    MissingField(&'static str),

    #[error("Domain error in {quantity}: {message}")]
    Domain {
        quantity: &'static str,
        message: String,
    },

    #[error("Invalid particle species index: {0} (expected 0, 1 or 2)")]
    InvalidSpecies(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TurbulenceError {
    pub fn domain(quantity: &'static str, message: impl Into<String>) -> Self {
        TurbulenceError::Domain {
            quantity,
            message: message.into(),
        }
    }
}

pub type TurbulenceResult<T> = Result<T, TurbulenceError>;
