//! Payouts: transfers of settled balance to a bank destination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{List, ListParams, Metadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    InTransit,
    Paid,
    Canceled,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: PayoutStatus,
    /// Bank account or pix key receiving the funds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters for `POST /v1/payouts`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayout {
    pub amount: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePayout {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            destination: None,
            metadata: None,
        }
    }
}

/// Proxy for `/v1/payouts`.
pub struct Payouts<'a> {
    transport: &'a Transport,
}

impl<'a> Payouts<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreatePayout) -> Result<Payout, Error> {
        self.transport
            .post("/v1/payouts", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Payout, Error> {
        self.transport.get(&format!("/v1/payouts/{id}"), &[]).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Payout>, Error> {
        self.transport.get("/v1/payouts", &params.to_query()).await
    }

    /// Cancel a payout that has not yet left for the bank.
    pub async fn cancel(&self, id: &str) -> Result<Payout, Error> {
        self.transport
            .post(&format!("/v1/payouts/{id}/cancel"), None)
            .await
    }
}
