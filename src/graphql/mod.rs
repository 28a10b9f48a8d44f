// GraphQL transport module.
// Provides the HTTP client, wire contracts, and the listings operations.

pub mod client;
pub mod operations;
pub mod types;

pub use client::GraphQlClient;
pub use types::Listing;
