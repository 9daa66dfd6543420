use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

/// SeaORM entity for the listings table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub section_id: i32,
    pub title: String,
    pub zip_code: String,
    pub city_id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub publication_date: DateTimeWithTimeZone,
    pub expiration_date: DateTimeWithTimeZone,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::cities::Entity",
        from = "Column::CityId",
        to = "super::cities::Column::Id"
    )]
    City,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assemble the domain model once the owner email has been resolved.
    pub fn into_listing(self, user_email: String) -> crate::models::Listing {
        crate::models::Listing {
            id: self.id,
            section_id: self.section_id,
            title: self.title,
            zip_code: self.zip_code,
            city_id: self.city_id,
            description: self.description,
            publication_date: self.publication_date.into(),
            expiration_date: self.expiration_date.into(),
            user_id: self.user_id,
            user_email,
        }
    }
}

impl From<crate::models::NewListing> for ActiveModel {
    fn from(input: crate::models::NewListing) -> Self {
        ActiveModel {
            id: Default::default(), // assigned by the sequence
            section_id: Set(input.section_id),
            title: Set(input.title),
            zip_code: Set(input.zip_code),
            city_id: Set(input.city_id),
            description: Set(input.description),
            publication_date: Set(input.publication_date.into()),
            expiration_date: Set(input.expiration_date.into()),
            user_id: Set(input.user_id),
        }
    }
}
