//! # HTTP Product Gateway
//!
//! `reqwest`-backed implementation of
//! [`ProductGateway`](dashboard_core::ProductGateway). One canonical
//! resource path per operation:
//!
//! - `GET    {base}/products` (body `{ "data": [Product] }`)
//! - `POST   {base}/products`
//! - `PUT    {base}/products/{id}`
//! - `DELETE {base}/products/{id}`
//!
//! Calls are fire-once: no retries, no idempotency key. Transport and
//! decode failures and non-2xx statuses all map onto
//! [`GatewayError`](dashboard_core::GatewayError) variants; the controller
//! turns them into user notifications.

use async_trait::async_trait;
use dashboard_core::{GatewayError, Product, ProductGateway, ProductId, ProductPayload};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Product API client bound to a configured base URL.
#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Creates a gateway for the given API base URL, e.g.
    /// `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

/// Wrapper the list endpoint puts around the product sequence.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Product>,
}

fn to_gateway_error(e: reqwest::Error) -> GatewayError {
    if e.is_decode() {
        GatewayError::Decode(e.to_string())
    } else {
        GatewayError::Transport(e.to_string())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status {
            code: status.as_u16(),
        })
    }
}

#[async_trait]
impl ProductGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        debug!(url = %self.collection_url(), "GET products");
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(to_gateway_error)?;
        let envelope: ListEnvelope = check_status(response)?
            .json()
            .await
            .map_err(to_gateway_error)?;
        Ok(envelope.data)
    }

    #[instrument(skip(self, payload))]
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, GatewayError> {
        debug!(url = %self.collection_url(), "POST product");
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await
            .map_err(to_gateway_error)?;
        check_status(response)?.json().await.map_err(to_gateway_error)
    }

    #[instrument(skip(self, payload))]
    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, GatewayError> {
        debug!(url = %self.item_url(id), "PUT product");
        let response = self
            .client
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await
            .map_err(to_gateway_error)?;
        check_status(response)?.json().await.map_err(to_gateway_error)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: &ProductId) -> Result<(), GatewayError> {
        debug!(url = %self.item_url(id), "DELETE product");
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(to_gateway_error)?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_resource_paths() {
        let gateway = HttpGateway::new("http://localhost:3000/api");
        assert_eq!(gateway.collection_url(), "http://localhost:3000/api/products");
        assert_eq!(
            gateway.item_url(&ProductId::from("p1")),
            "http://localhost:3000/api/products/p1"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let gateway = HttpGateway::new("http://localhost:3000/api/");
        assert_eq!(gateway.collection_url(), "http://localhost:3000/api/products");
    }

    #[test]
    fn list_envelope_decodes_the_data_wrapper() {
        let body = r#"{
            "data": [
                {
                    "_id": "p1",
                    "name": "Lamp",
                    "description": "A desk lamp",
                    "price": 19.5,
                    "category": "Home",
                    "image": "https://example.com/lamp.png"
                }
            ]
        }"#;

        let envelope: ListEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, ProductId::from("p1"));
        assert_eq!(envelope.data[0].price, 19.5);
    }
}
