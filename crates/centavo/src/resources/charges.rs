//! Charges: requests to collect payment via a specified method.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{List, ListParams, Metadata};

/// Server-side lifecycle state of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Pending,
    Paid,
    Canceled,
    Expired,
    Failed,
    Refunded,
    /// States this SDK version doesn't know about yet.
    #[serde(other)]
    Unknown,
}

/// How the payer settles the charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Pix,
    Card,
    Boleto,
    #[serde(other)]
    Unknown,
}

/// A request to collect payment. Amounts are integer minor-currency
/// units (e.g. cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: ChargeStatus,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount refunded so far, if any refund exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters for `POST /v1/charges`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharge {
    pub amount: i64,
    pub currency: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authorize only; settle later via capture. Defaults to immediate
    /// capture server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateCharge {
    pub fn new(amount: i64, currency: impl Into<String>, payment_method: PaymentMethod) -> Self {
        Self {
            amount,
            currency: currency.into(),
            payment_method,
            customer: None,
            description: None,
            capture: None,
            metadata: None,
        }
    }
}

/// Proxy for `/v1/charges`.
pub struct Charges<'a> {
    transport: &'a Transport,
}

impl<'a> Charges<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreateCharge) -> Result<Charge, Error> {
        self.transport
            .post("/v1/charges", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Charge, Error> {
        self.transport.get(&format!("/v1/charges/{id}"), &[]).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Charge>, Error> {
        self.transport.get("/v1/charges", &params.to_query()).await
    }

    /// Settle a previously authorized charge.
    pub async fn capture(&self, id: &str) -> Result<Charge, Error> {
        self.transport
            .post(&format!("/v1/charges/{id}/capture"), None)
            .await
    }

    pub async fn cancel(&self, id: &str) -> Result<Charge, Error> {
        self.transport
            .post(&format!("/v1/charges/{id}/cancel"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_deserializes_from_wire_shape() {
        let json = r#"{
            "id": "ch_123",
            "amount": 5000,
            "currency": "brl",
            "status": "pending",
            "paymentMethod": "pix",
            "createdAt": "2026-01-15T12:00:00Z"
        }"#;
        let charge: Charge = serde_json::from_str(json).unwrap();
        assert_eq!(charge.id, "ch_123");
        assert_eq!(charge.amount, 5000);
        assert_eq!(charge.status, ChargeStatus::Pending);
        assert_eq!(charge.payment_method, PaymentMethod::Pix);
        assert!(charge.paid_at.is_none());
    }

    #[test]
    fn test_unknown_status_does_not_break_deserialization() {
        let json = r#"{
            "id": "ch_123",
            "amount": 100,
            "currency": "brl",
            "status": "on_hold_for_review",
            "paymentMethod": "tab",
            "createdAt": "2026-01-15T12:00:00Z"
        }"#;
        let charge: Charge = serde_json::from_str(json).unwrap();
        assert_eq!(charge.status, ChargeStatus::Unknown);
        assert_eq!(charge.payment_method, PaymentMethod::Unknown);
    }

    #[test]
    fn test_create_charge_skips_unset_fields() {
        let params = CreateCharge::new(5000, "brl", PaymentMethod::Pix);
        let value = serde_json::to_value(&params).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["amount"], 5000);
        assert_eq!(obj["paymentMethod"], "pix");
        assert!(!obj.contains_key("capture"));
    }
}
