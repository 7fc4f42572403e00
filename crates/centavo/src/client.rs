//! Top-level client handing out per-resource proxies.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::http::Transport;
use crate::resources::balance::BalanceOps;
use crate::resources::charges::Charges;
use crate::resources::customers::Customers;
use crate::resources::orders::Orders;
use crate::resources::payment_links::PaymentLinks;
use crate::resources::payouts::Payouts;
use crate::resources::products::Products;
use crate::resources::refunds::Refunds;
use crate::resources::sandbox::Sandbox;
use crate::resources::tokens::Tokens;
use crate::resources::transactions::Transactions;

/// Centavo API client.
///
/// Cheap to clone; all clones share one HTTP connection pool and the
/// immutable [`Config`], so concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    /// Create a client with default settings from a secret key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::with_config(Config::new(api_key)?))
    }

    /// Create a client from a prepared [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self {
            transport: Arc::new(Transport::new(config)),
        }
    }

    /// True iff the configured key is a test-mode key.
    pub fn is_test_mode(&self) -> bool {
        self.transport.config().is_test_mode()
    }

    pub fn charges(&self) -> Charges<'_> {
        Charges::new(&self.transport)
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers::new(&self.transport)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.transport)
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(&self.transport)
    }

    pub fn balance(&self) -> BalanceOps<'_> {
        BalanceOps::new(&self.transport)
    }

    pub fn payment_links(&self) -> PaymentLinks<'_> {
        PaymentLinks::new(&self.transport)
    }

    pub fn payouts(&self) -> Payouts<'_> {
        Payouts::new(&self.transport)
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(&self.transport)
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(&self.transport)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.transport)
    }

    pub fn sandbox(&self) -> Sandbox<'_> {
        Sandbox::new(&self.transport)
    }
}
