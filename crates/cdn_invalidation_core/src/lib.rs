//! Domain primitives for turning storage change notifications into CDN
//! invalidation requests.
//!
//! This crate owns the inbound event contract, object key decoding, caller
//! reference generation and response payloads. It intentionally excludes AWS
//! SDK and Lambda runtime concerns.

pub mod caller_reference;
pub mod contract;
pub mod error;
pub mod object_keys;
