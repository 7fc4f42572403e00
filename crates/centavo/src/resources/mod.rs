//! Resource proxies, one per REST resource. Each method is a direct
//! mapping onto an endpoint; all behavior beyond the URL template lives
//! in the executor.

pub mod balance;
pub mod charges;
pub mod common;
pub mod customers;
pub mod orders;
pub mod payment_links;
pub mod payouts;
pub mod products;
pub mod refunds;
pub mod sandbox;
pub mod tokens;
pub mod transactions;
