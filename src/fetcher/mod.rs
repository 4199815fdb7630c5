pub mod backoff;
pub mod client;
pub mod errors;
pub mod loader;
pub mod pipeline;
pub mod reject;
pub mod types;

pub use client::{HttpPageLoader, LoaderSettings};
pub use errors::FetchError;
pub use loader::{PageLoader, RetryingLoader};
pub use reject::{Rejection, classify};
pub use types::PageResponse;
