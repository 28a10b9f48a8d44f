// GraphQL request and response contracts.
// Defines the listing record and the envelopes exchanged with the backend.

use serde::{Deserialize, Serialize};

/// A single rentable unit as returned by the `listings` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub image: String,
    pub address: String,
    pub price: f64,
    pub num_of_guests: u32,
    pub num_of_beds: u32,
    pub num_of_baths: u32,
    pub rating: f64,
}

/// Outgoing GraphQL request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

/// Incoming GraphQL response body.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorMessage>>,
}

/// One entry of the `errors` array. Locations and extensions are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
}

/// Variables for queries that take none; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoVariables {}

/// `data` payload of the `Listings` query.
#[derive(Debug, Deserialize)]
pub struct ListingsData {
    pub listings: Vec<Listing>,
}

/// Variables of the `DeleteListing` mutation.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteListingVariables<'a> {
    pub id: &'a str,
}

/// `data` payload of the `DeleteListing` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListingData {
    pub delete_listing: DeletedListing,
}

/// Echo of the deleted identifier.
#[derive(Debug, Deserialize)]
pub struct DeletedListing {
    pub id: String,
}
