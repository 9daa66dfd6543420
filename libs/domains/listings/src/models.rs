use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Serde codec for the listing surface's timestamps: `"YYYY-MM-DD HH:MM:SS"`,
/// interpreted as UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, FORMAT).map(|naive| naive.and_utc())
    }

    /// Variant for optional fields in partial updates; an absent key and an
    /// explicit `null` both mean "leave unchanged".
    pub mod option {
        use super::{parse, FORMAT};
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(
            date: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) => parse(&s).map(Some).map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

/// Listing entity - a classified advertisement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    /// Unique identifier (storage-assigned)
    pub id: i32,
    /// Category reference
    pub section_id: i32,
    pub title: String,
    pub zip_code: String,
    /// Location reference
    pub city_id: i32,
    pub description: String,
    #[schema(value_type = String, example = "2025-01-10 12:00:00")]
    pub publication_date: DateTime<Utc>,
    #[schema(value_type = String, example = "2025-02-10 12:00:00")]
    pub expiration_date: DateTime<Utc>,
    /// Owner reference
    pub user_id: i32,
    /// Owner email, resolved eagerly alongside the row
    pub user_email: String,
}

/// DTO for creating a new listing
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewListing {
    pub section_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 16))]
    pub zip_code: String,
    pub city_id: i32,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2025-01-10 12:00:00")]
    pub publication_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2025-02-10 12:00:00")]
    pub expiration_date: DateTime<Utc>,
    /// Owning user, resolved against the users table
    pub user_id: i32,
}

/// DTO for partially updating an existing listing.
///
/// Only keys present in the payload overwrite stored fields; everything else
/// keeps its previous value. Ownership is fixed at creation and not
/// updatable here.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateListing {
    pub section_id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 16))]
    pub zip_code: Option<String>,
    pub city_id: Option<i32>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(default, with = "timestamp::option")]
    #[schema(value_type = Option<String>, example = "2025-01-10 12:00:00")]
    pub publication_date: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    #[schema(value_type = Option<String>, example = "2025-02-10 12:00:00")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl UpdateListing {
    /// True when no key was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.section_id.is_none()
            && self.title.is_none()
            && self.zip_code.is_none()
            && self.city_id.is_none()
            && self.description.is_none()
            && self.publication_date.is_none()
            && self.expiration_date.is_none()
    }
}

/// Query filters for listing searches.
///
/// Absent keys impose no constraint; supplied keys combine conjunctively.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ListingFilter {
    /// Category to filter by
    pub section_id: Option<i32>,
    /// City to filter by
    pub city_id: Option<i32>,
    /// Keep listings published within the last N days (inclusive boundary)
    pub days_back: Option<i64>,
    /// Exclude listings owned by this user
    pub excluded_user_id: Option<i32>,
}

/// Wire mapping for a listing.
///
/// `user_id` carries the owner's **email address**; the field name is kept
/// for compatibility with existing API clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingResponse {
    pub id: i32,
    pub section_id: i32,
    pub title: String,
    pub zip_code: String,
    pub city_id: i32,
    pub description: String,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2025-01-10 12:00:00")]
    pub publication_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2025-02-10 12:00:00")]
    pub expiration_date: DateTime<Utc>,
    pub user_id: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            section_id: listing.section_id,
            title: listing.title,
            zip_code: listing.zip_code,
            city_id: listing.city_id,
            description: listing.description,
            publication_date: listing.publication_date,
            expiration_date: listing.expiration_date,
            user_id: listing.user_email,
        }
    }
}

impl Listing {
    /// Apply a partial update; absent keys leave previous values.
    pub fn apply_update(&mut self, update: UpdateListing) {
        if let Some(section_id) = update.section_id {
            self.section_id = section_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(zip_code) = update.zip_code {
            self.zip_code = zip_code;
        }
        if let Some(city_id) = update.city_id {
            self.city_id = city_id;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(publication_date) = update.publication_date {
            self.publication_date = publication_date;
        }
        if let Some(expiration_date) = update.expiration_date {
            self.expiration_date = expiration_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_listing() -> Listing {
        Listing {
            id: 7,
            section_id: 1,
            title: "Sofa".to_string(),
            zip_code: "10001".to_string(),
            city_id: 2,
            description: "Free to a good home".to_string(),
            publication_date: Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap(),
            expiration_date: Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap(),
            user_id: 3,
            user_email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn test_timestamp_round_trip() {
        let parsed = timestamp::parse("2025-01-10 12:30:45").unwrap();
        assert_eq!(parsed.format(timestamp::FORMAT).to_string(), "2025-01-10 12:30:45");
    }

    #[test]
    fn test_timestamp_rejects_other_formats() {
        assert!(timestamp::parse("2025-01-10T12:30:45Z").is_err());
        assert!(timestamp::parse("10/01/2025").is_err());
    }

    #[test]
    fn test_response_maps_owner_email_into_user_id_field() {
        let response: ListingResponse = sample_listing().into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user_id"], "owner@example.com");
        assert_eq!(json["publication_date"], "2025-01-10 12:00:00");
        assert_eq!(json["expiration_date"], "2025-02-10 12:00:00");
    }

    #[test]
    fn test_apply_update_partial() {
        let mut listing = sample_listing();

        listing.apply_update(UpdateListing {
            title: Some("Leather sofa".to_string()),
            ..Default::default()
        });

        assert_eq!(listing.title, "Leather sofa");
        assert_eq!(listing.zip_code, "10001"); // untouched
        assert_eq!(listing.section_id, 1);
    }

    #[test]
    fn test_update_listing_absent_dates_deserialize_to_none() {
        let update: UpdateListing = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(update.title.as_deref(), Some("New"));
        assert!(update.publication_date.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_listing_date_parses_wire_format() {
        let update: UpdateListing =
            serde_json::from_str(r#"{"expiration_date": "2025-03-01 00:00:00"}"#).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(update.expiration_date, Some(expected));
    }
}
