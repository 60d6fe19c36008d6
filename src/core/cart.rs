//! Cart business logic - Handles the shopping cart ahead of checkout.
//!
//! The cart holds one line per product with a quantity of at least one;
//! dropping a quantity to zero deletes the line. The resolved view prices
//! lines against the live catalog — checkout snapshots them permanently.

use crate::{
    entities::{CartItem, Product, cart_item},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// One resolved cart line, priced against the live catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Id of the product in this line
    pub product_id: String,
    /// Current catalog title
    pub title: String,
    /// Current unit price
    pub unit_price: f64,
    /// Quantity in the cart
    pub qty: i32,
    /// `unit_price * qty`
    pub line_total: f64,
}

/// The resolved cart: lines plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Resolved lines; lines whose product no longer exists are omitted
    pub lines: Vec<CartLine>,
    /// Sum of the line totals
    pub total: f64,
}

impl CartView {
    /// Whether the cart has no resolvable lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Adds one unit of a product to the cart.
///
/// Bumps the quantity if the product is already in the cart, otherwise
/// starts a new line at quantity one.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] if the product is not in the catalog,
/// or an error if the database operation fails.
pub async fn add_to_cart(db: &DatabaseConnection, product_id: &str) -> Result<cart_item::Model> {
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            product_id: product_id.to_string(),
        })?;

    let line = match CartItem::find_by_id(product_id).one(db).await? {
        Some(existing) => {
            let qty = existing.qty + 1;
            let mut line: cart_item::ActiveModel = existing.into();
            line.qty = Set(qty);
            line.update(db).await?
        }
        None => {
            let line = cart_item::ActiveModel {
                product_id: Set(product_id.to_string()),
                qty: Set(1),
            };
            line.insert(db).await?
        }
    };

    debug!(%product_id, qty = line.qty, "cart line updated");
    Ok(line)
}

/// Adjusts a cart line's quantity by a signed delta.
///
/// Returns the updated line, or `None` when the adjustment brought the
/// quantity to zero or below and the line was removed.
///
/// # Errors
/// Returns a validation error when the product has no cart line, or an
/// error if the database operation fails.
pub async fn adjust_quantity(
    db: &DatabaseConnection,
    product_id: &str,
    delta: i32,
) -> Result<Option<cart_item::Model>> {
    let existing = CartItem::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::Validation {
            message: format!("no cart line for product {product_id}"),
        })?;

    let qty = existing.qty + delta;
    if qty <= 0 {
        existing.delete(db).await?;
        debug!(%product_id, "cart line removed");
        return Ok(None);
    }

    let mut line: cart_item::ActiveModel = existing.into();
    line.qty = Set(qty);
    let updated = line.update(db).await?;
    debug!(%product_id, qty, "cart line updated");
    Ok(Some(updated))
}

/// Removes a product's line from the cart. Removing an absent line is a
/// no-op, mirroring the storefront's remove button.
///
/// # Errors
/// Returns an error if the database operation fails.
pub async fn remove_line(db: &DatabaseConnection, product_id: &str) -> Result<()> {
    CartItem::delete_many()
        .filter(cart_item::Column::ProductId.eq(product_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Empties the cart.
///
/// Generic over [`ConnectionTrait`] so checkout can clear the cart inside
/// its booking transaction.
///
/// # Errors
/// Returns an error if the database operation fails.
pub async fn clear_cart<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    CartItem::delete_many().exec(db).await?;
    Ok(())
}

/// Resolves the cart against the live catalog.
///
/// Lines whose product has been deleted since they were added are omitted
/// from the view (checkout still refuses them, see
/// [`crate::core::order::create_order`]).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn cart_view(db: &DatabaseConnection) -> Result<CartView> {
    let mut lines = Vec::new();
    let mut total = 0.0;

    for item in CartItem::find().all(db).await? {
        let Some(product) = Product::find_by_id(&item.product_id).one(db).await? else {
            continue;
        };
        let line_total = product.price * f64::from(item.qty);
        total += line_total;
        lines.push(CartLine {
            product_id: item.product_id,
            title: product.title,
            unit_price: product.price,
            qty: item.qty,
            line_total,
        });
    }

    Ok(CartView { lines, total })
}
