//! HTTP implementations of the core's external collaborator traits.

pub mod http_gateway;

pub use http_gateway::HttpGateway;
