// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::error::ApiError;
use crate::science::impact::{HistoryPoint, ImpactSummary};
use crate::science::profiles::PredictionRequest;

/// Body of `POST /api/carbon/predict`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Monthly kg CO₂
    pub predicted: f64,
    /// Whether the backend stored it in the user's history
    #[serde(default)]
    pub saved: bool,
}

/// One stored prediction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub predicted: f64,
    pub created_at: Option<String>,
    #[serde(default)]
    pub input: serde_json::Value,
}

impl From<&HistoryItem> for HistoryPoint {
    fn from(item: &HistoryItem) -> Self {
        HistoryPoint {
            t: item.created_at.clone(),
            kg: item.predicted,
        }
    }
}

#[derive(Deserialize)]
struct HistoryEnvelope {
    items: Vec<HistoryItem>,
}

impl ApiClient {
    /// `POST /api/carbon/predict`
    pub async fn predict(&self, request: &PredictionRequest<'_>) -> Result<PredictionResponse, ApiError> {
        self.post_json("/api/carbon/predict", request).await
    }

    /// `GET /api/carbon/impact` (requires a session)
    pub async fn impact(&self) -> Result<ImpactSummary, ApiError> {
        self.get_json("/api/carbon/impact").await
    }

    /// `GET /api/carbon/history` (requires a session), in backend order
    pub async fn history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        let envelope: HistoryEnvelope = self.get_json("/api/carbon/history").await?;
        Ok(envelope.items)
    }
}
