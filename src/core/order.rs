//! Order ledger business logic - Booking, status tracking, and visibility.
//!
//! Checkout turns the cart into an order inside a single database
//! transaction: it snapshots every line against the live catalog, computes
//! the total once, draws the next order identifier, books the order, and
//! clears the cart. Orders are never deleted; after booking, the only legal
//! mutation is a status reassignment, and every status is reachable from
//! every other.

use crate::{
    core::{cart, sequence, session::Session},
    entities::{CartItem, Order, Product, order},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Tracking information for one order: its status plus the delivery
/// estimate the storefront displays for that status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracking {
    /// The tracked order's identifier
    pub order_id: String,
    /// Current status
    pub status: order::OrderStatus,
    /// Display estimate derived from the status
    pub estimated_delivery: &'static str,
}

/// Books an order from the current cart contents.
///
/// Preconditions: a client-role session must be active and the cart must
/// be non-empty. Every cart line is resolved to a title/price snapshot; a
/// line whose product has been deleted fails the whole checkout and leaves
/// the cart untouched, so an order is never booked with fewer items than
/// the client put in. On success the cart is cleared as part of the same
/// transaction.
///
/// # Errors
/// Returns an error if:
/// - No session is active, or it is not a client session ([`Error::Auth`])
/// - The cart is empty ([`Error::Validation`])
/// - A cart line's product no longer exists ([`Error::ProductNotFound`])
/// - The database transaction fails
pub async fn create_order(
    db: &DatabaseConnection,
    session: Option<&Session>,
) -> Result<order::Model> {
    let session = session.ok_or_else(|| Error::Auth {
        message: "booking requires a client login".to_string(),
    })?;
    if session.is_admin() {
        return Err(Error::Auth {
            message: "booking requires a client login".to_string(),
        });
    }

    let txn = db.begin().await?;

    let cart_lines = CartItem::find().all(&txn).await?;
    if cart_lines.is_empty() {
        return Err(Error::Validation {
            message: "cart is empty".to_string(),
        });
    }

    let mut items = Vec::with_capacity(cart_lines.len());
    let mut total = 0.0;
    for line in cart_lines {
        let product = Product::find_by_id(&line.product_id)
            .one(&txn)
            .await?
            .ok_or_else(|| Error::ProductNotFound {
                product_id: line.product_id.clone(),
            })?;
        total += product.price * f64::from(line.qty);
        items.push(order::OrderItem {
            title: product.title,
            price: product.price,
            qty: line.qty,
        });
    }

    let order_id = sequence::next_id(&txn, "CLB").await?;
    let booked = order::ActiveModel {
        order_id: Set(order_id.clone()),
        client_name: Set(session.name.clone()),
        client_email: Set(session.email.clone()),
        items: Set(order::OrderItems(items)),
        total: Set(total),
        status: Set(order::OrderStatus::Pending),
        date: Set(chrono::Utc::now()),
    }
    .insert(&txn)
    .await?;

    cart::clear_cart(&txn).await?;
    txn.commit().await?;

    info!(%order_id, client = %session.email, total, "order booked");
    Ok(booked)
}

/// Reassigns an order's status.
///
/// The vocabulary is closed (the four [`order::OrderStatus`] values; unknown
/// strings are already rejected when parsing into the enum) but the
/// transition graph is deliberately open: any status can follow any other.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] if the order does not exist, or an
/// error if the update fails.
pub async fn set_status(
    db: &DatabaseConnection,
    order_id: &str,
    status: order::OrderStatus,
) -> Result<order::Model> {
    let existing = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::OrderNotFound {
            order_id: order_id.to_string(),
        })?;

    let mut active: order::ActiveModel = existing.into();
    active.status = Set(status);
    let updated = active.update(db).await?;

    info!(%order_id, %status, "order status updated");
    Ok(updated)
}

/// Lists the orders visible to a viewer, most recent first.
///
/// Admin sessions see every order; client sessions see only orders whose
/// client email matches the session email; no session sees nothing.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_orders_for(
    db: &DatabaseConnection,
    session: Option<&Session>,
) -> Result<Vec<order::Model>> {
    let Some(session) = session else {
        return Ok(Vec::new());
    };

    let mut query = Order::find().order_by_desc(order::Column::Date);
    if !session.is_admin() {
        query = query.filter(order::Column::ClientEmail.eq(session.email.as_str()));
    }

    query.all(db).await.map_err(Into::into)
}

/// Retrieves a specific order by its identifier.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order(db: &DatabaseConnection, order_id: &str) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Looks up an order for tracking.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] if the order does not exist, or an
/// error if the query fails.
pub async fn track_order(db: &DatabaseConnection, order_id: &str) -> Result<Tracking> {
    let order = get_order(db, order_id)
        .await?
        .ok_or_else(|| Error::OrderNotFound {
            order_id: order_id.to_string(),
        })?;

    Ok(Tracking {
        order_id: order.order_id,
        status: order.status,
        estimated_delivery: order.status.estimated_delivery(),
    })
}
