use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::prelude::*;

async fn migrated_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn test_db_schema_tables_and_columns() {
    let db = migrated_db().await;
    let manager = SchemaManager::new(&db);

    for table in ["user", "order", "order_line"] {
        assert!(manager.has_table(table).await.unwrap(), "{table}");
    }

    for column in [
        "id",
        "created_date",
        "number",
        "user_id",
        "customer_name",
        "customer_email",
        "status",
        "total",
        "currency",
        "address_line1",
        "address_city",
        "address_country",
    ] {
        assert!(manager.has_column("order", column).await.unwrap(), "{column}");
    }

    for column in ["order_id", "product_id", "quantity", "is_free"] {
        assert!(
            manager.has_column("order_line", column).await.unwrap(),
            "{column}"
        );
    }

    for column in ["name", "email", "phone", "status", "total_spent", "address_postal"] {
        assert!(manager.has_column("user", column).await.unwrap(), "{column}");
    }
}

#[tokio::test]
async fn test_db_schema_listing_indexes() {
    let db = migrated_db().await;
    let manager = SchemaManager::new(&db);

    assert!(
        manager
            .has_index("order", "index-Order-CreatedDate")
            .await
            .unwrap()
    );
    assert!(manager.has_index("order", "index-Order-Status").await.unwrap());
    assert!(
        manager
            .has_index("order_line", "index-OrderLine-OrderId-ProductId")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_db_schema_down_removes_tables() {
    let db = migrated_db().await;
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("order").await.unwrap());
    assert!(!manager.has_table("order_line").await.unwrap());
    assert!(!manager.has_table("user").await.unwrap());
}
