//! Integration tests for the Listings domain
//!
//! Run against real PostgreSQL via testcontainers: FK resolution, the owner
//! email join, conjunctive filtering, and partial updates all hit the real
//! schema (sections/cities come from the seed migration).

use chrono::{Duration, TimeZone, Utc};
use domain_listings::*;
use test_utils::{TestDataBuilder, TestDatabase};

fn new_listing(section_id: i32, city_id: i32, user_id: i32) -> NewListing {
    NewListing {
        section_id,
        title: "Sofa".to_string(),
        zip_code: "10001".to_string(),
        city_id,
        description: "Free to a good home".to_string(),
        publication_date: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        expiration_date: Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap(),
        user_id,
    }
}

#[tokio::test]
async fn test_create_and_get_round_trips_fields() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_create_get");

    let email = builder.email("owner");
    let user_id = db.create_test_user(&email).await;

    let created = repo.create(new_listing(1, 2, user_id)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Sofa");
    assert_eq!(created.section_id, 1);
    assert_eq!(created.city_id, 2);
    assert_eq!(created.user_email, email);

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.zip_code, created.zip_code);
    assert_eq!(fetched.publication_date, created.publication_date);
    assert_eq!(fetched.expiration_date, created.expiration_date);
    assert_eq!(fetched.user_email, email);
}

#[tokio::test]
async fn test_get_missing_listing_is_none() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());

    assert!(repo.get_by_id(987_654).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_filters_conjunctively() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_filters");

    let user_id = db.create_test_user(&builder.email("owner")).await;

    repo.create(new_listing(1, 1, user_id)).await.unwrap();
    repo.create(new_listing(1, 2, user_id)).await.unwrap();
    repo.create(new_listing(2, 2, user_id)).await.unwrap();

    let filter = ListingFilter {
        section_id: Some(1),
        city_id: Some(2),
        ..Default::default()
    };
    let result = repo.list(filter).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].section_id, 1);
    assert_eq!(result[0].city_id, 2);

    // Omitted filters impose no constraint
    let all = repo.list(ListingFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_days_back_cutoff_and_ordering() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_days_back");

    let user_id = db.create_test_user(&builder.email("owner")).await;

    let mut recent = new_listing(1, 1, user_id);
    recent.title = "Recent".to_string();
    recent.publication_date = Utc::now() - Duration::days(5);
    repo.create(recent).await.unwrap();

    let mut stale = new_listing(1, 1, user_id);
    stale.title = "Stale".to_string();
    stale.publication_date = Utc::now() - Duration::days(45);
    repo.create(stale).await.unwrap();

    let filter = ListingFilter {
        days_back: Some(30),
        ..Default::default()
    };
    let result = repo.list(filter).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Recent");

    // Without the cutoff, both rows come back newest-first
    let all = repo.list(ListingFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Recent");
    assert_eq!(all[1].title, "Stale");
}

#[tokio::test]
async fn test_excluded_user_filter() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_excluded_user");

    let first_user = db.create_test_user(&builder.email("first")).await;
    let second_user = db.create_test_user(&builder.email("second")).await;

    repo.create(new_listing(1, 1, first_user)).await.unwrap();
    repo.create(new_listing(1, 1, second_user)).await.unwrap();

    let filter = ListingFilter {
        excluded_user_id: Some(first_user),
        ..Default::default()
    };
    let result = repo.list(filter).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].user_id, second_user);
}

#[tokio::test]
async fn test_partial_update_keeps_unspecified_fields() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_partial_update");

    let user_id = db.create_test_user(&builder.email("owner")).await;
    let created = repo.create(new_listing(1, 1, user_id)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateListing {
                title: Some("Leather sofa".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Leather sofa");
    assert_eq!(updated.zip_code, created.zip_code);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.publication_date, created.publication_date);
    assert_eq!(updated.user_email, created.user_email);

    // And the change is durable
    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Leather sofa");
    assert_eq!(fetched.zip_code, created.zip_code);
}

#[tokio::test]
async fn test_delete_then_get_is_gone() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_delete");

    let user_id = db.create_test_user(&builder.email("owner")).await;
    let created = repo.create(new_listing(1, 1, user_id)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_reference_lookups_against_seeded_tables() {
    let db = TestDatabase::new().await;
    let repo = PgListingRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("listings_references");

    // The seed migration installs five sections and five cities
    assert!(repo.section_exists(1).await.unwrap());
    assert!(repo.city_exists(1).await.unwrap());
    assert!(!repo.section_exists(999).await.unwrap());
    assert!(!repo.city_exists(999).await.unwrap());

    let email = builder.email("owner");
    let user_id = db.create_test_user(&email).await;
    assert_eq!(repo.owner_email(user_id).await.unwrap(), Some(email));
    assert_eq!(repo.owner_email(999_999).await.unwrap(), None);
}
