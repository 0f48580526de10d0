use sea_orm::DatabaseConnection;

mod mapper;
mod model;
pub mod repository;

pub(crate) struct UserProvider {
    pub db: DatabaseConnection,
}
