//! HTTP server for the Pokédex catalog service.
//!
//! Exposed as a library so integration tests can build the router in-process
//! with a mock source behind it.

pub mod api;
pub mod metrics;
pub mod state;
