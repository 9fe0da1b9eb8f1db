//! Domain entity representing a store.

/// A shop. Products, payments and statistics point at it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStore {
    pub name: String,
    pub description: Option<String>,
}
