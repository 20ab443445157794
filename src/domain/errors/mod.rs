//! Domain error types.

mod provider_error;
mod store_error;

pub use provider_error::ProviderError;
pub use store_error::StoreError;
