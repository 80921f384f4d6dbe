//! # Test Doubles
//!
//! In-memory stand-ins for the two external collaborators, so controller
//! logic can be tested fast and deterministically without a backend.
//!
//! [`MockGateway`] implements [`ProductGateway`] against a queue of
//! expectations set up with a fluent builder API:
//!
//! ```ignore
//! let gateway = Arc::new(MockGateway::new());
//! gateway.expect_list().return_ok(vec![product]);
//! gateway.expect_delete(ProductId::from("p1")).return_err(GatewayError::Status { code: 500 });
//! // ... drive the controller ...
//! gateway.verify(); // panics if an expectation was never consumed
//! ```
//!
//! Expectations are consumed in order; an unexpected call (wrong operation,
//! wrong id, or an empty queue) panics. That property doubles as the
//! "no remote call was issued" assertion in validation tests: a submit that
//! wrongly reached the gateway would blow up immediately.
//!
//! Error injection is the main reason to prefer the mock over a live
//! backend: remote failures that are hard to provoke over HTTP (timeouts,
//! 500s) are a one-liner here.
//!
//! [`RecordingSink`] captures every notification so tests can assert on
//! what the user would have seen.

use crate::gateway::{GatewayError, ProductGateway};
use crate::model::{Product, ProductId, ProductPayload};
use crate::notify::{NotificationSink, Severity};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// An expected gateway call and its scripted response.
#[derive(Debug)]
enum Expectation {
    List(Result<Vec<Product>, GatewayError>),
    Create(Result<Product, GatewayError>),
    Update {
        id: ProductId,
        response: Result<Product, GatewayError>,
    },
    Delete {
        id: ProductId,
        response: Result<(), GatewayError>,
    },
}

impl Expectation {
    fn operation(&self) -> &'static str {
        match self {
            Expectation::List(_) => "list",
            Expectation::Create(_) => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
        }
    }
}

/// Scripted [`ProductGateway`] for tests.
#[derive(Default)]
pub struct MockGateway {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockGateway {
    /// Creates a mock with no expectations. Any call against it panics
    /// until expectations are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_products` call.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create_product` call.
    pub fn expect_create(&self) -> CreateExpectationBuilder {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update_product` call for this id.
    pub fn expect_update(&self, id: ProductId) -> UpdateExpectationBuilder {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete_product` call for this id.
    pub fn expect_delete(&self, id: ProductId) -> DeleteExpectationBuilder {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "Not all gateway expectations were met. {} remaining",
                expectations.len()
            );
        }
    }

    fn next_expectation(&self, operation: &str) -> Expectation {
        let mut expectations = self.expectations.lock().unwrap();
        match expectations.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected gateway call: {operation} with no expectation queued"),
        }
    }
}

#[async_trait]
impl ProductGateway for MockGateway {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        match self.next_expectation("list") {
            Expectation::List(response) => response,
            other => panic!("Expected {} call, got list", other.operation()),
        }
    }

    async fn create_product(&self, _payload: &ProductPayload) -> Result<Product, GatewayError> {
        match self.next_expectation("create") {
            Expectation::Create(response) => response,
            other => panic!("Expected {} call, got create", other.operation()),
        }
    }

    async fn update_product(
        &self,
        id: &ProductId,
        _payload: &ProductPayload,
    ) -> Result<Product, GatewayError> {
        match self.next_expectation("update") {
            Expectation::Update {
                id: expected,
                response,
            } => {
                assert_eq!(&expected, id, "update_product called with unexpected id");
                response
            }
            other => panic!("Expected {} call, got update", other.operation()),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), GatewayError> {
        match self.next_expectation("delete") {
            Expectation::Delete {
                id: expected,
                response,
            } => {
                assert_eq!(&expected, id, "delete_product called with unexpected id");
                response
            }
            other => panic!("Expected {} call, got delete", other.operation()),
        }
    }
}

/// Builder for `list_products` expectations.
pub struct ListExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ListExpectationBuilder {
    pub fn return_ok(self, products: Vec<Product>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List(Ok(products)));
    }

    pub fn return_err(self, error: GatewayError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List(Err(error)));
    }
}

/// Builder for `create_product` expectations.
pub struct CreateExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl CreateExpectationBuilder {
    pub fn return_ok(self, created: Product) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create(Ok(created)));
    }

    pub fn return_err(self, error: GatewayError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create(Err(error)));
    }
}

/// Builder for `update_product` expectations.
pub struct UpdateExpectationBuilder {
    id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl UpdateExpectationBuilder {
    pub fn return_ok(self, updated: Product) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Ok(updated),
            });
    }

    pub fn return_err(self, error: GatewayError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `delete_product` expectations.
pub struct DeleteExpectationBuilder {
    id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl DeleteExpectationBuilder {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Ok(()),
            });
    }

    pub fn return_err(self, error: GatewayError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Err(error),
            });
    }
}

/// [`NotificationSink`] that records every message for assertions.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, in order.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(
            ProductId::from(id),
            "Lamp",
            "A desk lamp",
            19.5,
            "Home",
            "https://example.com/lamp.png",
        )
    }

    #[tokio::test]
    async fn expectations_are_consumed_in_order() {
        let gateway = MockGateway::new();
        gateway.expect_list().return_ok(vec![product("a")]);
        gateway.expect_delete(ProductId::from("a")).return_ok();

        let listed = gateway.list_products().await.unwrap();
        assert_eq!(listed.len(), 1);
        gateway.delete_product(&ProductId::from("a")).await.unwrap();

        gateway.verify();
    }

    #[tokio::test]
    async fn scripted_errors_are_returned() {
        let gateway = MockGateway::new();
        gateway
            .expect_create()
            .return_err(GatewayError::Status { code: 500 });

        let payload = ProductPayload {
            name: "Lamp".to_string(),
            description: "A desk lamp".to_string(),
            price: 19.5,
            category: "Home".to_string(),
            image: "https://example.com/lamp.png".to_string(),
        };
        let result = gateway.create_product(&payload).await;
        assert_eq!(result, Err(GatewayError::Status { code: 500 }));
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected gateway call")]
    async fn unexpected_call_panics() {
        let gateway = MockGateway::new();
        let _ = gateway.list_products().await;
    }

    #[test]
    #[should_panic(expected = "Not all gateway expectations were met")]
    fn verify_panics_on_leftover_expectations() {
        let gateway = MockGateway::new();
        gateway.expect_list().return_ok(vec![]);
        gateway.verify();
    }

    #[test]
    fn recording_sink_keeps_messages_in_order() {
        let sink = RecordingSink::new();
        sink.notify(Severity::Success, "Product created");
        sink.notify(Severity::Error, "Error deleting product");

        assert_eq!(
            sink.messages(),
            vec![
                (Severity::Success, "Product created".to_string()),
                (Severity::Error, "Error deleting product".to_string()),
            ]
        );
    }
}
