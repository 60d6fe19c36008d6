//! Cart item entity - One line of the shopping cart.
//!
//! The cart is keyed by product id: re-adding a product bumps the quantity
//! of its existing line. A line whose quantity drops to zero is deleted,
//! never stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cart line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    /// Id of the product this line refers to
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    /// Quantity, always >= 1
    pub qty: i32,
}

/// No enforced relationship to products: the referenced product can be
/// deleted out from under a line, which checkout handles explicitly.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
