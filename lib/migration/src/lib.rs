use sea_orm_migration::prelude::*;
pub use sea_orm_migration::MigratorTrait;

pub(crate) mod datatype;

mod m20240301_000001_initial;
mod m20240312_000002_listing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_initial::Migration),
            Box::new(m20240312_000002_listing_indexes::Migration),
        ]
    }
}
