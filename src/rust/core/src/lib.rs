// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Carbon footprint estimation core
// Browser (WASM) and native profile
//

pub mod api;
pub mod config;
pub mod error;
pub mod footprint_kernel;
pub mod formulas;
pub mod predictor;
pub mod science;
#[cfg(test)]
pub mod tests_footprint;

// Re-export core types
pub use config::Config;
pub use error::{ApiError, ConfigError, EstimateError, FactorError};
pub use footprint_kernel::{calculate_total, FootprintKernel};
pub use predictor::{Estimate, EstimateResponse, EstimateSource, FallbackEstimator, RemotePredictor};

pub use science::factors::EmissionFactors;
pub use science::home::estimate_home;
pub use science::impact::{ImpactEngine, ImpactSummary};
pub use science::insights::Insights;
pub use science::lifestyle::estimate_lifestyle;
pub use science::profiles::{FootprintInput, HomeProfile, LifestyleProfile, TravelProfile};
pub use science::rating::{aggregate, EmissionReport, Rating};
pub use science::travel::estimate_travel;
