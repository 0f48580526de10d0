use sea_orm::DatabaseConnection;

mod mapper;
mod model;
pub mod repository;

pub(crate) struct OrderProvider {
    pub db: DatabaseConnection,
}

#[cfg(test)]
mod test;
