//! Tokens: single-use references to card details, so raw numbers never
//! ride along on charge requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;

/// Card details to tokenize. Sent once, never stored by the SDK.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardParams {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
}

/// Non-sensitive card summary echoed back on a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub brand: String,
    pub last4: String,
    pub exp_month: u8,
    pub exp_year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    /// True once the token has been attached to a charge.
    pub used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardSummary>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for `POST /v1/tokens`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateToken {
    pub card: CardParams,
}

/// Proxy for `/v1/tokens`.
pub struct Tokens<'a> {
    transport: &'a Transport,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreateToken) -> Result<Token, Error> {
        self.transport
            .post("/v1/tokens", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Token, Error> {
        self.transport.get(&format!("/v1/tokens/{id}"), &[]).await
    }
}
