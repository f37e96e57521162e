//! Core components of the `finchart` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FinClient`] and its builder.
//! - The primary [`FinError`] type.
//! - Timestamp rendering shared by charts and stock snapshots.
//! - Internal networking helpers.

/// The main client (`FinClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`FinError`) for the crate.
pub mod error;
/// Timestamp to date-string conversion.
pub mod time;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FinClient`
pub use client::{Backoff, FinClient, FinClientBuilder, RetryConfig};
pub use error::FinError;
