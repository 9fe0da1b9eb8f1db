//! Domain entity representing a brand.

/// A product brand.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
}
