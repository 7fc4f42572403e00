//! Payment links: shareable hosted checkout URLs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::charges::PaymentMethod;
use crate::resources::common::{List, ListParams, Metadata};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    pub id: String,
    /// Hosted checkout URL to share with the payer.
    pub url: String,
    pub name: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Product sold through this link, when tied to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters for `POST /v1/payment-links`. Either a fixed `amount` or
/// a `product` id sets the price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentLink {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentLink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            currency: None,
            product: None,
            payment_methods: None,
            metadata: None,
        }
    }
}

/// Parameters for `PUT /v1/payment-links/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Proxy for `/v1/payment-links`.
pub struct PaymentLinks<'a> {
    transport: &'a Transport,
}

impl<'a> PaymentLinks<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreatePaymentLink) -> Result<PaymentLink, Error> {
        self.transport
            .post("/v1/payment-links", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<PaymentLink, Error> {
        self.transport
            .get(&format!("/v1/payment-links/{id}"), &[])
            .await
    }

    pub async fn update(&self, id: &str, params: &UpdatePaymentLink) -> Result<PaymentLink, Error> {
        self.transport
            .put(
                &format!("/v1/payment-links/{id}"),
                serde_json::to_value(params)?,
            )
            .await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<PaymentLink>, Error> {
        self.transport
            .get("/v1/payment-links", &params.to_query())
            .await
    }

    /// Stop the hosted page from accepting new payments.
    pub async fn deactivate(&self, id: &str) -> Result<PaymentLink, Error> {
        self.transport
            .post(&format!("/v1/payment-links/{id}/deactivate"), None)
            .await
    }
}
