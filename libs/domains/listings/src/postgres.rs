use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ListingError, ListingResult},
    models::{Listing, ListingFilter, NewListing, UpdateListing},
    repository::ListingRepository,
};

/// PostgreSQL implementation of ListingRepository using SeaORM
#[derive(Clone)]
pub struct PgListingRepository {
    db: DatabaseConnection,
}

impl PgListingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> ListingError {
    ListingError::Database(e.to_string())
}

/// The FK guarantees the owner row exists; a miss on the join means the
/// store is inconsistent and is reported as a storage failure.
fn assemble(
    model: entity::listings::Model,
    owner: Option<entity::users::Model>,
) -> ListingResult<Listing> {
    let owner = owner.ok_or_else(|| {
        ListingError::Database(format!("owner row missing for listing {}", model.id))
    })?;
    Ok(model.into_listing(owner.email))
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn create(&self, input: NewListing) -> ListingResult<Listing> {
        let user_id = input.user_id;
        let active_model: entity::listings::ActiveModel = input.into();

        let model = entity::listings::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(db_err)?;

        let owner = entity::users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        tracing::info!(listing_id = %model.id, "Created listing");
        assemble(model, owner)
    }

    async fn get_by_id(&self, id: i32) -> ListingResult<Option<Listing>> {
        let found = entity::listings::Entity::find_by_id(id)
            .find_also_related(entity::users::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match found {
            Some((model, owner)) => Ok(Some(assemble(model, owner)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        let mut query =
            entity::listings::Entity::find().find_also_related(entity::users::Entity);

        if let Some(section_id) = filter.section_id {
            query = query.filter(entity::listings::Column::SectionId.eq(section_id));
        }

        if let Some(city_id) = filter.city_id {
            query = query.filter(entity::listings::Column::CityId.eq(city_id));
        }

        if let Some(days_back) = filter.days_back {
            // Inclusive: a listing exactly days_back old is still returned.
            let cutoff = Utc::now() - Duration::days(days_back);
            query = query.filter(entity::listings::Column::PublicationDate.gte(cutoff));
        }

        if let Some(excluded_user_id) = filter.excluded_user_id {
            query = query.filter(entity::listings::Column::UserId.ne(excluded_user_id));
        }

        let rows = query
            .order_by_desc(entity::listings::Column::PublicationDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(model, owner)| assemble(model, owner))
            .collect()
    }

    async fn update(&self, id: i32, input: UpdateListing) -> ListingResult<Listing> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))?;

        let mut listing = existing;
        listing.apply_update(input);

        let active_model = entity::listings::ActiveModel {
            id: Set(listing.id),
            section_id: Set(listing.section_id),
            title: Set(listing.title.clone()),
            zip_code: Set(listing.zip_code.clone()),
            city_id: Set(listing.city_id),
            description: Set(listing.description.clone()),
            publication_date: Set(listing.publication_date.into()),
            expiration_date: Set(listing.expiration_date.into()),
            user_id: Set(listing.user_id),
        };

        let updated = entity::listings::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        tracing::info!(listing_id = %id, "Updated listing");
        Ok(updated.into_listing(listing.user_email))
    }

    async fn delete(&self, id: i32) -> ListingResult<bool> {
        let result = entity::listings::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(listing_id = %id, "Deleted listing");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn section_exists(&self, id: i32) -> ListingResult<bool> {
        let found = entity::sections::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn city_exists(&self, id: i32) -> ListingResult<bool> {
        let found = entity::cities::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn owner_email(&self, user_id: i32) -> ListingResult<Option<String>> {
        let found = entity::users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(|u| u.email))
    }
}
