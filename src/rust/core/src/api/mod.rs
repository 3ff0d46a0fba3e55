// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Backend client: auth session plus the carbon endpoints

pub mod auth;
pub mod carbon;
pub mod client;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use carbon::{HistoryItem, PredictionResponse};
pub use client::ApiClient;
pub use session::{MemoryTokenStore, Session, TokenStore, User};
