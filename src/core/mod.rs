//! Core components of the `yf-chart` client.
//!
//! This module contains the building blocks every chart call is made of:
//! - The shared [`YfClient`] and its builder.
//! - The [`YfError`] taxonomy and the structured [`ApiError`].
//! - [`QueryParams`] and the per-call [`CallContext`].
//! - Request dispatch and response classification.

/// The shared client (`YfClient`), builder, and defaults.
pub mod client;
/// Cancellation and deadlines for a single call.
pub mod context;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Ordered, deterministic query parameters.
pub mod query;

pub(crate) mod classify;
pub(crate) mod net;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use context::CallContext;
pub use error::{ApiError, Stage, YfError};
pub use query::QueryParams;
