use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

/// Identifiers are stored in their hyphenated text form
pub(crate) fn uuid_char<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).char_len(36).not_null().take()
}

/// Creation and modification instants, kept to millisecond precision
pub(crate) fn timestamp<T: IntoIden>(ident: T, manager: &SchemaManager) -> ColumnDef {
    let column_type = match manager.get_database_backend() {
        DatabaseBackend::MySql => "datetime(3)",
        DatabaseBackend::Postgres => "timestamp(3)",
        DatabaseBackend::Sqlite => "datetime",
    };

    ColumnDef::new(ident)
        .custom(Alias::new(column_type))
        .not_null()
        .take()
}

/// Monetary amount in minor currency units
pub(crate) fn minor_units<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).big_integer().not_null().take()
}

pub(crate) fn order_status<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).string_len(16).take()
}

/// Free-text address part, absent parts stay NULL
pub(crate) fn address_part<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).string().null().take()
}

pub(crate) fn currency_code<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).char_len(3).not_null().take()
}
