//! AWS-oriented adapters and handlers for CDN invalidation.
//!
//! This crate owns runtime integration details (Lambda handlers, the
//! CloudFront adapter, configuration and logging) and re-exports the domain
//! primitives of `cdn_invalidation_core` under a single `runtime` boundary.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;

pub mod runtime {
    pub use cdn_invalidation_core::{caller_reference, contract, error, object_keys};
}
