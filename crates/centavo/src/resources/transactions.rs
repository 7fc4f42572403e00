//! Transactions: the settlement view of money movements, with fees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{List, ListParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payment,
    Refund,
    Payout,
    Adjustment,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Settled,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    /// Gross amount in minor currency units.
    pub amount: i64,
    /// Processing fee withheld.
    pub fee: i64,
    /// `amount - fee`.
    pub net: i64,
    pub currency: String,
    /// Charge, refund, or payout behind this transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregates returned by `GET /v1/transactions/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub count: u64,
    pub total_amount: i64,
    pub total_fees: i64,
    pub total_net: i64,
    pub currency: String,
}

/// Date-range filter for the summary endpoint.
#[derive(Debug, Clone, Default)]
pub struct SummaryParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl SummaryParams {
    pub fn from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(from) = self.from {
            query.push(("from", from.to_rfc3339()));
        }
        if let Some(to) = self.to {
            query.push(("to", to.to_rfc3339()));
        }
        query
    }
}

/// Proxy for `/v1/transactions`.
pub struct Transactions<'a> {
    transport: &'a Transport,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn retrieve(&self, id: &str) -> Result<Transaction, Error> {
        self.transport
            .get(&format!("/v1/transactions/{id}"), &[])
            .await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Transaction>, Error> {
        self.transport
            .get("/v1/transactions", &params.to_query())
            .await
    }

    pub async fn summary(&self, params: &SummaryParams) -> Result<TransactionSummary, Error> {
        self.transport
            .get("/v1/transactions/summary", &params.to_query())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserializes_with_fee_breakdown() {
        let json = r#"{
            "id": "txn_1",
            "type": "payment",
            "status": "settled",
            "amount": 5000,
            "fee": 150,
            "net": 4850,
            "currency": "brl",
            "source": "ch_123",
            "createdAt": "2026-03-01T09:30:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Payment);
        assert_eq!(tx.net, tx.amount - tx.fee);
    }
}
