//! Shared test utilities for the storefront.
//!
//! This module provides common helper functions for setting up test
//! databases, creating sessions, and booking test records with sensible
//! defaults.

use crate::{
    core::{
        cart, order,
        session::{Role, Session},
    },
    entities::{order::Model as OrderModel, product},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a client session for the given email.
///
/// The name is derived from the local part of the email so ownership
/// filters on either field behave consistently in tests.
#[must_use]
pub fn client_session(email: &str) -> Session {
    let name = email.split('@').next().unwrap_or(email);
    Session {
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Client,
    }
}

/// Creates an admin session.
#[must_use]
pub fn admin_session() -> Session {
    Session {
        name: "Admin".to_string(),
        email: "admin@celebumore.test".to_string(),
        role: Role::Admin,
    }
}

/// Inserts a catalog product directly, with a fixed id.
///
/// Bypasses the admin-only add operation (which draws sequential ids) so
/// tests can reference stable ids like `"p1"`.
pub async fn insert_test_product(
    db: &DatabaseConnection,
    id: &str,
    title: &str,
    price: f64,
) -> Result<product::Model> {
    product::ActiveModel {
        id: Set(id.to_string()),
        title: Set(title.to_string()),
        description: Set("Test product".to_string()),
        old_price: Set(price * 4.0),
        price: Set(price),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Books an order for one unit of the given product on behalf of the
/// session, going through the real cart-and-checkout path.
pub async fn book_test_order(
    db: &DatabaseConnection,
    session: &Session,
    product_id: &str,
) -> Result<OrderModel> {
    cart::add_to_cart(db, product_id).await?;
    order::create_order(db, Some(session)).await
}
