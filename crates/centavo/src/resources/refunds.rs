//! Refunds: full or partial returns of a paid charge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{List, ListParams, Metadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: String,
    /// Charge being refunded.
    pub charge: String,
    pub amount: i64,
    pub currency: String,
    pub status: RefundStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters for `POST /v1/refunds`. Omitting `amount` refunds the
/// full remaining balance of the charge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefund {
    pub charge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateRefund {
    pub fn new(charge: impl Into<String>) -> Self {
        Self {
            charge: charge.into(),
            amount: None,
            reason: None,
            metadata: None,
        }
    }
}

/// Proxy for `/v1/refunds`.
pub struct Refunds<'a> {
    transport: &'a Transport,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreateRefund) -> Result<Refund, Error> {
        self.transport
            .post("/v1/refunds", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Refund, Error> {
        self.transport.get(&format!("/v1/refunds/{id}"), &[]).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Refund>, Error> {
        self.transport.get("/v1/refunds", &params.to_query()).await
    }
}
