use std::sync::Arc;

use crate::error::{ListingError, ListingResult};
use crate::models::{Listing, ListingFilter, NewListing, UpdateListing};
use crate::repository::ListingRepository;

/// Service layer for Listing business logic
#[derive(Clone)]
pub struct ListingService<R: ListingRepository> {
    repository: Arc<R>,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new listing.
    ///
    /// Section, city, and owner references are resolved eagerly; a miss on
    /// any of them fails the request before anything is written.
    pub async fn create_listing(&self, input: NewListing) -> ListingResult<Listing> {
        if !self.repository.section_exists(input.section_id).await? {
            return Err(ListingError::Validation("Invalid section".to_string()));
        }

        if !self.repository.city_exists(input.city_id).await? {
            return Err(ListingError::Validation("Invalid city".to_string()));
        }

        if self.repository.owner_email(input.user_id).await?.is_none() {
            return Err(ListingError::Validation("Invalid user".to_string()));
        }

        check_publication_window(input.publication_date, input.expiration_date)?;

        self.repository.create(input).await
    }

    /// Get a listing by ID
    pub async fn get_listing(&self, id: i32) -> ListingResult<Listing> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))
    }

    /// List listings; every supplied filter narrows the result (AND).
    pub async fn get_listings(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        if let Some(days_back) = filter.days_back {
            if days_back < 0 {
                return Err(ListingError::Validation(
                    "Invalid days_back value".to_string(),
                ));
            }
        }

        self.repository.list(filter).await
    }

    /// Partially update a listing.
    ///
    /// Changed references are re-resolved and the publication window is
    /// re-checked against the merged values, so an update cannot leave the
    /// row expiring before it was published.
    pub async fn update_listing(&self, id: i32, input: UpdateListing) -> ListingResult<Listing> {
        let existing = self.get_listing(id).await?;

        if let Some(section_id) = input.section_id {
            if !self.repository.section_exists(section_id).await? {
                return Err(ListingError::Validation("Invalid section".to_string()));
            }
        }

        if let Some(city_id) = input.city_id {
            if !self.repository.city_exists(city_id).await? {
                return Err(ListingError::Validation("Invalid city".to_string()));
            }
        }

        let publication = input.publication_date.unwrap_or(existing.publication_date);
        let expiration = input.expiration_date.unwrap_or(existing.expiration_date);
        check_publication_window(publication, expiration)?;

        self.repository.update(id, input).await
    }

    /// Delete a listing
    pub async fn delete_listing(&self, id: i32) -> ListingResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ListingError::NotFound(id));
        }

        Ok(())
    }
}

fn check_publication_window(
    publication: chrono::DateTime<chrono::Utc>,
    expiration: chrono::DateTime<chrono::Utc>,
) -> ListingResult<()> {
    if expiration < publication {
        return Err(ListingError::Validation(
            "Expiration date must not precede publication date".to_string(),
        ));
    }
    Ok(())
}
