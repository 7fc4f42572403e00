//! Customers: payer records that charges and orders can reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::http::Transport;
use crate::resources::common::{Deleted, List, ListParams, Metadata};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Tax identifier (e.g. CPF/CNPJ).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Parameters for `POST /v1/customers`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            tax_id: None,
            phone: None,
            metadata: None,
        }
    }
}

/// Parameters for `PUT /v1/customers/{id}`; unset fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Proxy for `/v1/customers`.
pub struct Customers<'a> {
    transport: &'a Transport,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreateCustomer) -> Result<Customer, Error> {
        self.transport
            .post("/v1/customers", Some(serde_json::to_value(params)?))
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Customer, Error> {
        self.transport
            .get(&format!("/v1/customers/{id}"), &[])
            .await
    }

    pub async fn update(&self, id: &str, params: &UpdateCustomer) -> Result<Customer, Error> {
        self.transport
            .put(&format!("/v1/customers/{id}"), serde_json::to_value(params)?)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Deleted, Error> {
        self.transport.delete(&format!("/v1/customers/{id}")).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<List<Customer>, Error> {
        self.transport
            .get("/v1/customers", &params.to_query())
            .await
    }
}
