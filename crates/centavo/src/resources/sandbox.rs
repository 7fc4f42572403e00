//! Sandbox: test-mode-only endpoints that simulate payment lifecycle
//! events the payer would normally trigger.
//!
//! These routes exist only behind `sk_test_` keys; the server rejects
//! live-mode credentials.

use crate::error::Error;
use crate::http::Transport;
use crate::resources::charges::Charge;

/// Proxy for `/v1/sandbox`.
pub struct Sandbox<'a> {
    transport: &'a Transport,
}

impl<'a> Sandbox<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Simulate the payer completing payment; the charge moves to paid.
    pub async fn pay_charge(&self, id: &str) -> Result<Charge, Error> {
        self.transport
            .post(&format!("/v1/sandbox/charges/{id}/pay"), None)
            .await
    }

    /// Simulate the charge reaching its expiry without payment.
    pub async fn expire_charge(&self, id: &str) -> Result<Charge, Error> {
        self.transport
            .post(&format!("/v1/sandbox/charges/{id}/expire"), None)
            .await
    }

    /// Simulate a payment attempt the issuer declines.
    pub async fn fail_charge(&self, id: &str) -> Result<Charge, Error> {
        self.transport
            .post(&format!("/v1/sandbox/charges/{id}/fail"), None)
            .await
    }
}
