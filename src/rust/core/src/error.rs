// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use thiserror::Error;

/// Precondition violations raised by the estimators.
///
/// The form layer is expected to prevent these before calling in; the engine
/// fails fast and never returns a partial figure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("vehicleType is required when transport is car")]
    MissingVehicleType,

    #[error("unknown {field} value: '{value}'")]
    UnknownVariant { field: &'static str, value: String },

    #[error("{field} must not be negative, got {value}")]
    NegativeQuantity { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteQuantity { field: &'static str },

    #[error("{field} must lie within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl EstimateError {
    /// Check a non-negative finite quantity
    pub(crate) fn check_quantity(field: &'static str, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(EstimateError::NonFiniteQuantity { field });
        }
        if value < 0.0 {
            return Err(EstimateError::NegativeQuantity { field, value });
        }
        Ok(value)
    }

    /// Check a finite quantity inside a closed interval
    pub(crate) fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(EstimateError::NonFiniteQuantity { field });
        }
        if value < min || value > max {
            return Err(EstimateError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

/// Failures loading or validating an emission factor table
#[derive(Error, Debug)]
pub enum FactorError {
    #[error("failed to read factor table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse factor table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("factor {name} must be finite and non-negative, got {value}")]
    InvalidFactor { name: &'static str, value: f64 },

    #[error("rating thresholds must be strictly ascending")]
    UnorderedThresholds,

    #[error("global average baseline must be positive, got {0}")]
    InvalidBaseline(f64),
}

/// Environment configuration problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures talking to the remote backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("implausible prediction: {0}")]
    ImplausiblePrediction(f64),
}
