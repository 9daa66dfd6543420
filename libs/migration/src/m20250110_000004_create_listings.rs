use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(pk_auto(Listings::Id))
                    .col(integer(Listings::SectionId))
                    .col(string(Listings::Title))
                    .col(string(Listings::ZipCode))
                    .col(integer(Listings::CityId))
                    .col(text(Listings::Description))
                    .col(timestamp_with_time_zone(Listings::PublicationDate))
                    .col(timestamp_with_time_zone(Listings::ExpirationDate))
                    .col(integer(Listings::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_section_id")
                            .from(Listings::Table, Listings::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_city_id")
                            .from(Listings::Table, Listings::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_user_id")
                            .from(Listings::Table, Listings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listings_section_id")
                    .table(Listings::Table)
                    .col(Listings::SectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listings_city_id")
                    .table(Listings::Table)
                    .col(Listings::CityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listings_user_id")
                    .table(Listings::Table)
                    .col(Listings::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listings_publication_date")
                    .table(Listings::Table)
                    .col(Listings::PublicationDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
    SectionId,
    Title,
    ZipCode,
    CityId,
    Description,
    PublicationDate,
    ExpirationDate,
    UserId,
}

#[derive(DeriveIden)]
enum Sections {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
