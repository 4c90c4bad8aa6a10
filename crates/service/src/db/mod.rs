//! SeaORM query functions backing the repository implementations.

use sea_orm::{ActiveValue, Value};

pub mod company_store;
pub mod invoice_store;

/// `None` leaves the column out of the INSERT. None of the columns written
/// this way have defaults, so the row then fails NOT NULL in storage.
pub(crate) fn set_or_omit<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    match value {
        Some(v) => ActiveValue::Set(v),
        None => ActiveValue::NotSet,
    }
}
