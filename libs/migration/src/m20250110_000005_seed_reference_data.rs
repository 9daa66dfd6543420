use sea_orm_migration::prelude::*;

const SECTIONS: [&str; 5] = ["For Sale", "Housing", "Jobs", "Services", "Community"];
const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sections and cities are reference tables: rows are installed here
        // and never mutated through the API.
        let mut insert_sections = Query::insert()
            .into_table(Sections::Table)
            .columns([Sections::Name])
            .to_owned();
        for name in SECTIONS {
            insert_sections.values_panic([name.into()]);
        }
        manager.exec_stmt(insert_sections).await?;

        let mut insert_cities = Query::insert()
            .into_table(Cities::Table)
            .columns([Cities::Name])
            .to_owned();
        for name in CITIES {
            insert_cities.values_panic([name.into()]);
        }
        manager.exec_stmt(insert_cities).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Sections::Table)
                    .and_where(Expr::col(Sections::Name).is_in(SECTIONS))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Cities::Table)
                    .and_where(Expr::col(Cities::Name).is_in(CITIES))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sections {
    Table,
    Name,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Name,
}
