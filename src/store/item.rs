//! The persisted item row.

use serde::Serialize;
use sqlx::FromRow;

/// A stored item. `id` is assigned by the database and immutable;
/// `name` carries no uniqueness constraint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
}
