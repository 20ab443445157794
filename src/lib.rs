//! Wanderlens - cached travel photo lookups.
//!
//! Resolves free-text subjects such as "Bali turquoise beach aerial" to a
//! single representative photo. Lookups go through a persisted cache with a
//! freshness window, and fall back from Pexels to Unsplash when a provider
//! has nothing to offer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the image cache services.
pub mod application;
/// Explicitly constructed application context.
pub mod context;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

pub use context::{AppContext, ContextError};

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "wanderlens";
