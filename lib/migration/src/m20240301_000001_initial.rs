use sea_orm_migration::prelude::*;

use crate::datatype::{
    address_part, currency_code, minor_units, order_status, timestamp, uuid_char,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid_char(User::Id).primary_key())
                    .col(timestamp(User::CreatedDate, manager))
                    .col(timestamp(User::LastModified, manager))
                    .col(ColumnDef::new(User::Name).string().not_null())
                    .col(ColumnDef::new(User::Email).string().not_null())
                    .col(ColumnDef::new(User::Phone).string().null())
                    .col(order_status(User::Status).null())
                    .col(minor_units(User::TotalSpent).default(0))
                    .col(currency_code(User::Currency))
                    .col(address_part(User::AddressLine1))
                    .col(address_part(User::AddressLine2))
                    .col(address_part(User::AddressCity))
                    .col(address_part(User::AddressRegion))
                    .col(address_part(User::AddressPostal))
                    .col(address_part(User::AddressCountry))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(uuid_char(Order::Id).primary_key())
                    .col(timestamp(Order::CreatedDate, manager))
                    .col(timestamp(Order::LastModified, manager))
                    .col(ColumnDef::new(Order::Number).string().not_null())
                    .col(uuid_char(Order::UserId))
                    .col(ColumnDef::new(Order::CustomerName).string().not_null())
                    .col(ColumnDef::new(Order::CustomerEmail).string().not_null())
                    .col(order_status(Order::Status).not_null())
                    .col(minor_units(Order::Total))
                    .col(currency_code(Order::Currency))
                    .col(address_part(Order::AddressLine1))
                    .col(address_part(Order::AddressLine2))
                    .col(address_part(Order::AddressCity))
                    .col(address_part(Order::AddressRegion))
                    .col(address_part(Order::AddressPostal))
                    .col(address_part(Order::AddressCountry))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Order-UserId")
                            .from_tbl(Order::Table)
                            .from_col(Order::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderLine::Table)
                    .if_not_exists()
                    .col(uuid_char(OrderLine::Id).primary_key())
                    .col(uuid_char(OrderLine::OrderId))
                    .col(uuid_char(OrderLine::ProductId))
                    .col(ColumnDef::new(OrderLine::Quantity).unsigned().not_null())
                    .col(
                        ColumnDef::new(OrderLine::IsFree)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-OrderLine-OrderId")
                            .from_tbl(OrderLine::Table)
                            .from_col(OrderLine::OrderId)
                            .to_tbl(Order::Table)
                            .to_col(Order::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLine::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum User {
    Table,
    Id,
    CreatedDate,
    LastModified,
    Name,
    Email,
    Phone,
    Status,
    TotalSpent,
    Currency,
    AddressLine1,
    AddressLine2,
    AddressCity,
    AddressRegion,
    AddressPostal,
    AddressCountry,
}

#[derive(Iden)]
pub enum Order {
    Table,
    Id,
    CreatedDate,
    LastModified,
    Number,
    UserId,
    CustomerName,
    CustomerEmail,
    Status,
    Total,
    Currency,
    AddressLine1,
    AddressLine2,
    AddressCity,
    AddressRegion,
    AddressPostal,
    AddressCountry,
}

#[derive(Iden)]
pub enum OrderLine {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    IsFree,
}
