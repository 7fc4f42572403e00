//! Account balance and the ledger entries behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{List, ListParams};

/// Current account balance, in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Settled funds available for payout.
    pub available: i64,
    /// Funds from recent payments still in the settlement window.
    pub pending: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTransactionKind {
    Payment,
    Refund,
    Payout,
    Fee,
    Adjustment,
    #[serde(other)]
    Unknown,
}

/// One ledger entry affecting the balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTransaction {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: BalanceTransactionKind,
    /// Id of the charge, refund, or payout that produced this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Proxy for `/v1/balance`.
pub struct BalanceOps<'a> {
    transport: &'a Transport,
}

impl<'a> BalanceOps<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn retrieve(&self) -> Result<Balance, Error> {
        self.transport.get("/v1/balance", &[]).await
    }

    pub async fn transactions(
        &self,
        params: &ListParams,
    ) -> Result<List<BalanceTransaction>, Error> {
        self.transport
            .get("/v1/balance/transactions", &params.to_query())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_transaction_kind_rides_on_type_field() {
        let json = r#"{
            "id": "bt_1",
            "amount": -250,
            "currency": "brl",
            "type": "fee",
            "createdAt": "2026-02-01T00:00:00Z"
        }"#;
        let tx: BalanceTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, BalanceTransactionKind::Fee);
        assert_eq!(tx.amount, -250);
    }
}
