// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Remote prediction with local fallback
//!
//! The backend model is tried once; whatever goes wrong with it (transport,
//! status, payload) the locally computed report is returned instead. Input
//! precondition violations are raised before any request is made.

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiClient, PredictionResponse};
use crate::error::{ApiError, EstimateError};
use crate::footprint_kernel::{FootprintKernel, FootprintResponse};
use crate::science::factors::EmissionFactors;
use crate::science::profiles::{FootprintInput, PredictionRequest};
use crate::science::rating::EmissionReport;

/// Anything that can turn a flattened profile into a monthly figure
#[allow(async_fn_in_trait)]
pub trait RemotePredictor {
    async fn predict(&self, request: &PredictionRequest<'_>) -> Result<PredictionResponse, ApiError>;
}

impl RemotePredictor for ApiClient {
    async fn predict(&self, request: &PredictionRequest<'_>) -> Result<PredictionResponse, ApiError> {
        ApiClient::predict(self, request).await
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EstimateSource {
    Remote { saved: bool },
    Local { reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub report: EmissionReport,
    pub source: EstimateSource,
}

impl Estimate {
    pub fn is_remote(&self) -> bool {
        matches!(self.source, EstimateSource::Remote { .. })
    }
}

/// Dashboard payload for an estimate: events and insights follow the reported
/// total, whichever source produced it
#[derive(Clone, Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub response: FootprintResponse,
    pub source: EstimateSource,
}

pub struct FallbackEstimator<P> {
    predictor: P,
    factors: EmissionFactors,
}

impl<P: RemotePredictor> FallbackEstimator<P> {
    pub fn new(predictor: P, factors: EmissionFactors) -> Self {
        Self { predictor, factors }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub async fn estimate(&self, input: &FootprintInput) -> Result<Estimate, EstimateError> {
        let local = FootprintKernel::compute(input, &self.factors)?;

        let outcome = self
            .predictor
            .predict(&input.prediction_request())
            .await
            .and_then(|response| check_plausible(response.predicted).map(|kg| (kg, response.saved)));

        match outcome {
            Ok((predicted, saved)) => {
                info!("Using remote prediction {:.2} kg/month (local {:.2})", predicted, local.total_monthly_kg);
                Ok(Estimate {
                    report: local.with_predicted_total(predicted, &self.factors),
                    source: EstimateSource::Remote { saved },
                })
            }
            Err(e) => {
                warn!("Remote prediction failed, using local estimate: {}", e);
                Ok(Estimate {
                    report: local,
                    source: EstimateSource::Local { reason: e.to_string() },
                })
            }
        }
    }

    /// [`estimate`](Self::estimate) plus events and insights for the chosen report
    pub async fn analyze(&self, input: &FootprintInput) -> Result<EstimateResponse, EstimateError> {
        let start = instant::Instant::now();
        let Estimate { report, source } = self.estimate(input).await?;
        Ok(EstimateResponse {
            response: FootprintKernel::describe(input, report, start),
            source,
        })
    }
}

fn check_plausible(predicted: f64) -> Result<f64, ApiError> {
    if predicted.is_finite() && predicted >= 0.0 {
        Ok(predicted)
    } else {
        Err(ApiError::ImplausiblePrediction(predicted))
    }
}
