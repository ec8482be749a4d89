//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single HTTP choke point (token attachment, error mapping,
//! session-expiry signalling) and `types` defines the wire schema.

pub mod api;
pub mod types;
