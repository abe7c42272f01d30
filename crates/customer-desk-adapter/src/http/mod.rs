/*
[INPUT]:  HTTP client configuration and customer API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod customers;
pub mod error;

pub use error::{ApiError, Result};

pub use client::{ClientConfig, CustomerClient, DEFAULT_BASE_URL};
pub use customers::CustomerApi;
