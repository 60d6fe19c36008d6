//! Product entity - Represents a catalog item offered by the store.
//!
//! Each product carries a struck-through display price (`old_price`) next to
//! the actual selling price. Products are immutable after creation; the admin
//! can only add or delete them. Orders snapshot title and price at booking
//! time, so deleting a product never rewrites history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product (e.g., `"p1"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display title (e.g., "Personalized Video Gift")
    pub title: String,
    /// Short description shown on the product card
    pub description: String,
    /// Struck-through original price, for display only
    pub old_price: f64,
    /// Actual selling price per unit
    pub price: f64,
}

/// Products have no foreign-key relationships; carts reference them by id
/// and orders keep their own snapshots.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
