use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ListingError, ListingResult};
use crate::models::{Listing, ListingFilter, NewListing, UpdateListing};

/// Repository trait for Listing persistence and reference resolution
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing; the storage layer assigns the id
    async fn create(&self, input: NewListing) -> ListingResult<Listing>;

    /// Get a listing by ID, owner email resolved
    async fn get_by_id(&self, id: i32) -> ListingResult<Option<Listing>>;

    /// List listings matching every supplied filter, newest publication first
    async fn list(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>>;

    /// Apply a partial update to an existing listing
    async fn update(&self, id: i32, input: UpdateListing) -> ListingResult<Listing>;

    /// Delete a listing by ID; false when no row existed
    async fn delete(&self, id: i32) -> ListingResult<bool>;

    /// Check that a section reference resolves
    async fn section_exists(&self, id: i32) -> ListingResult<bool>;

    /// Check that a city reference resolves
    async fn city_exists(&self, id: i32) -> ListingResult<bool>;

    /// Resolve a user id to the owner email, if the user exists
    async fn owner_email(&self, user_id: i32) -> ListingResult<Option<String>>;
}

/// In-memory implementation of ListingRepository (for development/testing).
///
/// Reference data (sections, cities, users) is registered up front with the
/// `add_*` helpers, standing in for the seeded tables.
#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    listings: Arc<RwLock<HashMap<i32, Listing>>>,
    sections: Arc<RwLock<HashSet<i32>>>,
    cities: Arc<RwLock<HashSet<i32>>>,
    users: Arc<RwLock<HashMap<i32, String>>>,
    next_id: AtomicI32,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
            sections: Arc::new(RwLock::new(HashSet::new())),
            cities: Arc::new(RwLock::new(HashSet::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }

    pub async fn add_section(&self, id: i32) {
        self.sections.write().await.insert(id);
    }

    pub async fn add_city(&self, id: i32) {
        self.cities.write().await.insert(id);
    }

    pub async fn add_user(&self, id: i32, email: &str) {
        self.users.write().await.insert(id, email.to_string());
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn create(&self, input: NewListing) -> ListingResult<Listing> {
        let user_email = self
            .owner_email(input.user_id)
            .await?
            .ok_or_else(|| ListingError::Validation("Invalid user".to_string()))?;

        let mut listings = self.listings.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let listing = Listing {
            id,
            section_id: input.section_id,
            title: input.title,
            zip_code: input.zip_code,
            city_id: input.city_id,
            description: input.description,
            publication_date: input.publication_date,
            expiration_date: input.expiration_date,
            user_id: input.user_id,
            user_email,
        };
        listings.insert(id, listing.clone());

        tracing::info!(listing_id = %id, "Created listing");
        Ok(listing)
    }

    async fn get_by_id(&self, id: i32) -> ListingResult<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.get(&id).cloned())
    }

    async fn list(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        let listings = self.listings.read().await;
        let cutoff = filter
            .days_back
            .map(|days| Utc::now() - Duration::days(days));

        let mut result: Vec<Listing> = listings
            .values()
            .filter(|l| {
                if let Some(section_id) = filter.section_id {
                    if l.section_id != section_id {
                        return false;
                    }
                }
                if let Some(city_id) = filter.city_id {
                    if l.city_id != city_id {
                        return false;
                    }
                }
                if let Some(cutoff) = cutoff {
                    if l.publication_date < cutoff {
                        return false;
                    }
                }
                if let Some(excluded_user_id) = filter.excluded_user_id {
                    if l.user_id == excluded_user_id {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        // Newest publication first
        result.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));

        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateListing) -> ListingResult<Listing> {
        let mut listings = self.listings.write().await;

        let listing = listings.get_mut(&id).ok_or(ListingError::NotFound(id))?;
        listing.apply_update(input);
        let updated = listing.clone();

        tracing::info!(listing_id = %id, "Updated listing");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ListingResult<bool> {
        let mut listings = self.listings.write().await;

        if listings.remove(&id).is_some() {
            tracing::info!(listing_id = %id, "Deleted listing");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn section_exists(&self, id: i32) -> ListingResult<bool> {
        Ok(self.sections.read().await.contains(&id))
    }

    async fn city_exists(&self, id: i32) -> ListingResult<bool> {
        Ok(self.cities.read().await.contains(&id))
    }

    async fn owner_email(&self, user_id: i32) -> ListingResult<Option<String>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn seeded_repo() -> InMemoryListingRepository {
        let repo = InMemoryListingRepository::new();
        repo.add_section(1).await;
        repo.add_section(2).await;
        repo.add_city(1).await;
        repo.add_city(2).await;
        repo.add_user(1, "first@example.com").await;
        repo.add_user(2, "second@example.com").await;
        repo
    }

    fn new_listing(section_id: i32, city_id: i32, user_id: i32) -> NewListing {
        NewListing {
            section_id,
            title: "Sofa".to_string(),
            zip_code: "10001".to_string(),
            city_id,
            description: "Free to a good home".to_string(),
            publication_date: Utc::now(),
            expiration_date: Utc::now() + Duration::days(30),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let repo = seeded_repo().await;

        let created = repo.create(new_listing(1, 2, 1)).await.unwrap();
        assert_eq!(created.user_email, "first@example.com");

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_filters_are_conjunctive() {
        let repo = seeded_repo().await;
        repo.create(new_listing(1, 1, 1)).await.unwrap();
        repo.create(new_listing(1, 2, 1)).await.unwrap();
        repo.create(new_listing(2, 2, 2)).await.unwrap();

        let filter = ListingFilter {
            section_id: Some(1),
            city_id: Some(2),
            ..Default::default()
        };
        let result = repo.list(filter).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].section_id, 1);
        assert_eq!(result[0].city_id, 2);
    }

    #[tokio::test]
    async fn test_list_without_filters_returns_everything() {
        let repo = seeded_repo().await;
        repo.create(new_listing(1, 1, 1)).await.unwrap();
        repo.create(new_listing(2, 2, 2)).await.unwrap();

        let result = repo.list(ListingFilter::default()).await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_days_back_excludes_older_publications() {
        let repo = seeded_repo().await;

        let mut recent = new_listing(1, 1, 1);
        recent.publication_date = Utc::now() - Duration::days(5);
        repo.create(recent).await.unwrap();

        let mut stale = new_listing(1, 1, 1);
        stale.title = "Stale".to_string();
        stale.publication_date = Utc::now() - Duration::days(45);
        repo.create(stale).await.unwrap();

        let filter = ListingFilter {
            days_back: Some(30),
            ..Default::default()
        };
        let result = repo.list(filter).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_ne!(result[0].title, "Stale");
    }

    #[tokio::test]
    async fn test_excluded_user_filters_out_their_listings() {
        let repo = seeded_repo().await;
        repo.create(new_listing(1, 1, 1)).await.unwrap();
        repo.create(new_listing(1, 1, 2)).await.unwrap();

        let filter = ListingFilter {
            excluded_user_id: Some(1),
            ..Default::default()
        };
        let result = repo.list(filter).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, 2);
    }

    #[tokio::test]
    async fn test_list_orders_newest_publication_first() {
        let repo = seeded_repo().await;

        let mut older = new_listing(1, 1, 1);
        older.title = "Older".to_string();
        older.publication_date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        repo.create(older).await.unwrap();

        let mut newer = new_listing(1, 1, 1);
        newer.title = "Newer".to_string();
        newer.publication_date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        repo.create(newer).await.unwrap();

        let result = repo.list(ListingFilter::default()).await.unwrap();
        assert_eq!(result[0].title, "Newer");
        assert_eq!(result[1].title, "Older");
    }

    #[tokio::test]
    async fn test_update_missing_listing_is_not_found() {
        let repo = seeded_repo().await;

        let result = repo.update(999, UpdateListing::default()).await;
        assert!(matches!(result, Err(ListingError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_gone() {
        let repo = seeded_repo().await;
        let created = repo.create(new_listing(1, 1, 1)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
