//! # Remote Gateway
//!
//! The contract between the dashboard controller and the external product
//! API. The controller only ever talks to this trait; the production
//! implementation lives in the app crate (`HttpGateway`, built on
//! `reqwest`), and tests substitute [`MockGateway`](crate::mock::MockGateway).
//!
//! Every call is fire-once: no retries, no timeout policy, no idempotency
//! key. A failed call is converted into a notification at the operation
//! boundary and never mutates the collection store.
//!
//! ## Resource paths
//!
//! One canonical path per operation:
//!
//! | Operation | Request                    | Response            |
//! |-----------|----------------------------|---------------------|
//! | list      | `GET {base}/products`      | `{ "data": [...] }` |
//! | create    | `POST {base}/products`     | created `Product`   |
//! | update    | `PUT {base}/products/{id}` | updated `Product`   |
//! | delete    | `DELETE {base}/products/{id}` | no content       |

use crate::model::{Product, ProductId, ProductPayload};
use async_trait::async_trait;
use thiserror::Error;

/// Failure from the remote product API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never completed (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Remote rejected the request with status {code}")]
    Status { code: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("Response decode error: {0}")]
    Decode(String),
}

/// Async interface to the external product API.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetches the whole remote collection.
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Creates a product and returns the server's canonical record,
    /// including the assigned id.
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, GatewayError>;

    /// Updates an existing product and returns the server's canonical
    /// record.
    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, GatewayError>;

    /// Deletes a product.
    async fn delete_product(&self, id: &ProductId) -> Result<(), GatewayError>;
}
