// Listings GraphQL operations.
// Typed wrappers for the `Listings` query and `DeleteListing` mutation.

use crate::error::{AdminError, Result};
use crate::runtime::ListingsApi;

use super::client::GraphQlClient;
use super::types::{
    DeleteListingData, DeleteListingVariables, Listing, ListingsData, NoVariables,
};

pub const LISTINGS_QUERY: &str = "query Listings {
  listings {
    id
    title
    image
    address
    price
    numOfGuests
    numOfBeds
    numOfBaths
    rating
  }
}";

pub const DELETE_LISTING_MUTATION: &str = "mutation DeleteListing($id: ID!) {
  deleteListing(id: $id) {
    id
  }
}";

impl ListingsApi for GraphQlClient {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let data: ListingsData = self
            .execute("Listings", LISTINGS_QUERY, NoVariables::default())
            .await?;
        validate_listings(data.listings)
    }

    async fn delete_listing(&self, id: &str) -> Result<String> {
        if id.trim().is_empty() {
            return Err(AdminError::InvalidRequest(
                "deleteListing requires a listing id".to_string(),
            ));
        }

        let data: DeleteListingData = self
            .execute(
                "DeleteListing",
                DELETE_LISTING_MUTATION,
                DeleteListingVariables { id },
            )
            .await?;
        confirm_deleted(id, data)
    }
}

/// Reject records the rest of the app cannot address. Order is preserved.
fn validate_listings(listings: Vec<Listing>) -> Result<Vec<Listing>> {
    if let Some(index) = listings.iter().position(|l| l.id.is_empty()) {
        return Err(AdminError::InvalidResponse(format!(
            "listing at position {} has an empty id",
            index
        )));
    }
    Ok(listings)
}

fn confirm_deleted(requested: &str, data: DeleteListingData) -> Result<String> {
    let echoed = data.delete_listing.id;
    if echoed != requested {
        return Err(AdminError::InvalidResponse(format!(
            "deleteListing echoed id {:?}, expected {:?}",
            echoed, requested
        )));
    }
    Ok(echoed)
}
