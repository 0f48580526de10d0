//! sea-orm backed storage for the listing engine

use std::sync::Arc;

use listing_core::repository::DataRepository;
use listing_core::repository::error::DataLayerError;
use listing_core::repository::order_repository::OrderRepository;
use listing_core::repository::user_repository::UserRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection};

use crate::order::OrderProvider;
use crate::user::UserProvider;

mod entity;
mod list_query_generic;
mod mapper;

pub mod order;
pub mod user;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

#[derive(Clone)]
pub struct DataLayer {
    #[cfg(any(test, feature = "test_utils"))]
    db: DatabaseConnection,
    order_repository: Arc<dyn OrderRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl DataLayer {
    pub async fn create(database_url: &str) -> Result<Self, DataLayerError> {
        let db = db_conn(database_url, true).await?;
        Ok(Self::build(db))
    }

    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            order_repository: Arc::new(OrderProvider { db: db.clone() }),
            user_repository: Arc::new(UserProvider { db: db.clone() }),
            #[cfg(any(test, feature = "test_utils"))]
            db,
        }
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Opens a connection, optionally bringing the schema up to date
pub async fn db_conn(
    database_url: impl Into<String>,
    run_migrations: bool,
) -> Result<DatabaseConnection, DataLayerError> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = sea_orm::Database::connect(options).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {e}");
        DataLayerError::Db(e.into())
    })?;

    if run_migrations {
        Migrator::up(&db, None).await.map_err(|e| {
            tracing::error!("Failed to run database migrations: {e}");
            DataLayerError::Db(e.into())
        })?;
    }

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_order_repository(&self) -> Arc<dyn OrderRepository> {
        self.order_repository.clone()
    }

    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
