pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_users;
mod m20250110_000002_create_sections;
mod m20250110_000003_create_cities;
mod m20250110_000004_create_listings;
mod m20250110_000005_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_users::Migration),
            Box::new(m20250110_000002_create_sections::Migration),
            Box::new(m20250110_000003_create_cities::Migration),
            Box::new(m20250110_000004_create_listings::Migration),
            Box::new(m20250110_000005_seed_reference_data::Migration),
        ]
    }
}
