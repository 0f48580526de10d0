use sea_orm_migration::prelude::*;

use crate::m20240301_000001_initial::{Order, OrderLine, User};

#[derive(DeriveMigrationName)]
pub struct Migration;

const ORDER_CREATED_DATE_INDEX: &str = "index-Order-CreatedDate";
const ORDER_STATUS_INDEX: &str = "index-Order-Status";
const ORDER_USER_ID_INDEX: &str = "index-Order-UserId";
const ORDER_LINE_ORDER_ID_PRODUCT_ID_INDEX: &str = "index-OrderLine-OrderId-ProductId";
const USER_CREATED_DATE_INDEX: &str = "index-User-CreatedDate";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(ORDER_CREATED_DATE_INDEX)
                    .table(Order::Table)
                    .col(Order::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ORDER_STATUS_INDEX)
                    .table(Order::Table)
                    .col(Order::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ORDER_USER_ID_INDEX)
                    .table(Order::Table)
                    .col(Order::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ORDER_LINE_ORDER_ID_PRODUCT_ID_INDEX)
                    .table(OrderLine::Table)
                    .col(OrderLine::OrderId)
                    .col(OrderLine::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(USER_CREATED_DATE_INDEX)
                    .table(User::Table)
                    .col(User::CreatedDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(USER_CREATED_DATE_INDEX)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name(ORDER_LINE_ORDER_ID_PRODUCT_ID_INDEX)
                    .table(OrderLine::Table)
                    .to_owned(),
            )
            .await?;

        for name in [
            ORDER_USER_ID_INDEX,
            ORDER_STATUS_INDEX,
            ORDER_CREATED_DATE_INDEX,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Order::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}
