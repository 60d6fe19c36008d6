//! Catalog business logic - Handles all product-related operations.
//!
//! Products are immutable after creation: the admin can add and delete them
//! but there is no update-in-place. Orders keep their own title/price
//! snapshots, so catalog changes never rewrite booked history. All functions
//! are async and return Result types for proper error handling.

use crate::{
    core::{sequence, session::Session},
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Description and struck-through price applied to admin-added products,
/// matching what the storefront shows for them.
const CUSTOM_PRODUCT_DESCRIPTION: &str = "Custom product";
const OLD_PRICE_FACTOR: f64 = 4.0;

/// Retrieves the full catalog, ordered by product id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its id, returning None if absent.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product(
    db: &DatabaseConnection,
    product_id: &str,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a product to the catalog. Admin only.
///
/// The id is drawn from the `"p"` identifier sequence; the description and
/// the struck-through display price are derived the way the storefront
/// always has (a flat label, four times the selling price).
///
/// # Errors
/// Returns an error if:
/// - No admin session is active
/// - The title is empty or whitespace-only
/// - The price is zero, negative, or not finite
/// - The database insert fails
pub async fn add_product(
    db: &DatabaseConnection,
    session: Option<&Session>,
    title: &str,
    price: f64,
) -> Result<product::Model> {
    if !session.is_some_and(Session::is_admin) {
        return Err(Error::Auth {
            message: "adding products requires the admin role".to_string(),
        });
    }

    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "product title cannot be empty".to_string(),
        });
    }

    if !(price.is_finite() && price > 0.0) {
        return Err(Error::Validation {
            message: format!("product price must be positive: {price}"),
        });
    }

    let id = sequence::next_id(db, "p").await?;
    let model = product::ActiveModel {
        id: Set(id.clone()),
        title: Set(title.trim().to_string()),
        description: Set(CUSTOM_PRODUCT_DESCRIPTION.to_string()),
        old_price: Set(price * OLD_PRICE_FACTOR),
        price: Set(price),
    };

    let created = model.insert(db).await?;
    info!(product_id = %id, %title, price, "product added to catalog");
    Ok(created)
}

/// Deletes a product from the catalog. Admin only.
///
/// Existing orders keep their snapshots; cart lines still pointing at the
/// product become unresolvable and fail checkout.
///
/// # Errors
/// Returns an error if no admin session is active, the product does not
/// exist, or the delete fails.
pub async fn delete_product(
    db: &DatabaseConnection,
    session: Option<&Session>,
    product_id: &str,
) -> Result<()> {
    if !session.is_some_and(Session::is_admin) {
        return Err(Error::Auth {
            message: "deleting products requires the admin role".to_string(),
        });
    }

    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            product_id: product_id.to_string(),
        })?;

    product.delete(db).await?;
    info!(%product_id, "product deleted from catalog");
    Ok(())
}
