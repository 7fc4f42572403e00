//! Orders: multi-item purchases settled through a charge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{List, ListParams, Metadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Paid,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product id this line refers to.
    pub product: String,
    pub quantity: u32,
    pub unit_amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Order total in minor currency units.
    pub amount: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Charge created to collect the order total, once one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters for `POST /v1/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub items: Vec<OrderItem>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateOrder {
    pub fn new(items: Vec<OrderItem>, currency: impl Into<String>) -> Self {
        Self {
            items,
            currency: currency.into(),
            customer: None,
            metadata: None,
        }
    }
}

/// Proxy for `/v1/orders`.
pub struct Orders<'a> {
    transport: &'a Transport,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreateOrder) -> Result<Order, Error> {
        self.transport
            .post("/v1/orders", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Order, Error> {
        self.transport.get(&format!("/v1/orders/{id}"), &[]).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Order>, Error> {
        self.transport.get("/v1/orders", &params.to_query()).await
    }

    pub async fn cancel(&self, id: &str) -> Result<Order, Error> {
        self.transport
            .post(&format!("/v1/orders/{id}/cancel"), None)
            .await
    }
}
