//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` defines endpoints and error
//! normalization, and `types` defines the wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod mock_transport;
pub mod transport;
pub mod types;
