//! Rust client SDK for the Centavo payment-processing API.
//!
//! Typed request/response shapes over the REST endpoints (charges,
//! customers, refunds, payouts, payment links, products, orders,
//! transactions, sandbox simulation), funneled through one request
//! executor that adds bearer auth, a per-attempt timeout, and retry
//! with capped exponential backoff.
//!
//! # Quick example
//!
//! ```no_run
//! use centavo::{Client, CreateCharge, PaymentMethod};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), centavo::Error> {
//! let client = Client::new("sk_test_abc")?;
//!
//! let charge = client
//!     .charges()
//!     .create(&CreateCharge::new(5000, "brl", PaymentMethod::Pix))
//!     .await?;
//!
//! // Test mode only: simulate the payer completing the pix payment.
//! let paid = client.sandbox().pay_charge(&charge.id).await?;
//! println!("charge {} is now {:?}", paid.id, paid.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;

pub use client::Client;
pub use config::Config;
pub use error::Error;

// Flatten the common types so callers rarely need the resource paths.
pub use resources::balance::{Balance, BalanceTransaction, BalanceTransactionKind};
pub use resources::charges::{Charge, ChargeStatus, CreateCharge, PaymentMethod};
pub use resources::common::{Deleted, List, ListParams, Metadata};
pub use resources::customers::{CreateCustomer, Customer, UpdateCustomer};
pub use resources::orders::{CreateOrder, Order, OrderItem, OrderStatus};
pub use resources::payment_links::{CreatePaymentLink, PaymentLink, UpdatePaymentLink};
pub use resources::payouts::{CreatePayout, Payout, PayoutStatus};
pub use resources::products::{CreateProduct, Product, UpdateProduct};
pub use resources::refunds::{CreateRefund, Refund, RefundStatus};
pub use resources::tokens::{CardParams, CardSummary, CreateToken, Token};
pub use resources::transactions::{
    SummaryParams, Transaction, TransactionKind, TransactionStatus, TransactionSummary,
};
