use listing_core::model::order_status::OrderStatus;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{OrderId, ProductId, UserId};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::entity::{order, order_line, user};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2024-04-02 21:37 UTC)
}

pub struct TestUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_order_status: Option<OrderStatus>,
    pub total_spent: i64,
    pub currency: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            name: "Ann Smith".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            created_date: get_dummy_date(),
            last_order_status: None,
            total_spent: 0,
            currency: "EUR".to_string(),
            city: None,
            country: None,
        }
    }
}

pub struct TestOrder {
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub created_date: OffsetDateTime,
    pub status: OrderStatus,
    pub total: i64,
    pub currency: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Default for TestOrder {
    fn default() -> Self {
        Self {
            number: "#1000".to_string(),
            customer_name: "Ann Smith".to_string(),
            customer_email: "ann@example.com".to_string(),
            created_date: get_dummy_date(),
            status: OrderStatus::Pending,
            total: 10000,
            currency: "EUR".to_string(),
            city: None,
            country: None,
        }
    }
}

pub async fn insert_user(db: &DatabaseConnection, params: TestUser) -> Result<UserId, DbErr> {
    let model = user::ActiveModel {
        id: Set(UserId::new_v4()),
        created_date: Set(params.created_date),
        last_modified: Set(params.created_date),
        name: Set(params.name),
        email: Set(params.email),
        phone: Set(params.phone),
        status: Set(params.last_order_status.map(Into::into)),
        total_spent: Set(params.total_spent),
        currency: Set(params.currency),
        address_line1: Set(None),
        address_line2: Set(None),
        address_city: Set(params.city),
        address_region: Set(None),
        address_postal: Set(None),
        address_country: Set(params.country),
    }
    .insert(db)
    .await?;

    Ok(model.id)
}

pub async fn insert_order(
    db: &DatabaseConnection,
    user_id: UserId,
    params: TestOrder,
) -> Result<OrderId, DbErr> {
    let model = order::ActiveModel {
        id: Set(OrderId::new_v4()),
        created_date: Set(params.created_date),
        last_modified: Set(params.created_date),
        number: Set(params.number),
        user_id: Set(user_id),
        customer_name: Set(params.customer_name),
        customer_email: Set(params.customer_email),
        status: Set(params.status.into()),
        total: Set(params.total),
        currency: Set(params.currency),
        address_line1: Set(None),
        address_line2: Set(None),
        address_city: Set(params.city),
        address_region: Set(None),
        address_postal: Set(None),
        address_country: Set(params.country),
    }
    .insert(db)
    .await?;

    Ok(model.id)
}

pub async fn insert_order_line(
    db: &DatabaseConnection,
    order_id: OrderId,
    product_id: ProductId,
    is_free: bool,
) -> Result<(), DbErr> {
    order_line::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        order_id: Set(order_id),
        product_id: Set(product_id),
        quantity: Set(1),
        is_free: Set(is_free),
    }
    .insert(db)
    .await?;

    Ok(())
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db = db_conn(database_url, true).await.unwrap();
    DataLayer::build(db)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}
