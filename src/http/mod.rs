//! HTTP transport layer
//!
//! Provides the external API routing: the usage page, the health probe, and
//! the `/api/v1/calculate` endpoint.

pub mod handlers;
