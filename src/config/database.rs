//! Database configuration module for the storefront.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to automatically generate SQL statements
//! from the entity models, ensuring that the database schema matches the Rust struct
//! definitions without requiring manual SQL.

use crate::entities::{CartItem, Feedback, LedgerSequence, Order, Product, Refund, Upload};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the `SQLite` database at the given URL.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all storefront tables using `SeaORM`'s schema generation from
/// entity definitions.
///
/// Creates tables for products, cart items, orders, refunds, uploads,
/// feedback, and identifier sequences.
///
/// # Errors
/// Returns an error if any table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let product_table = schema.create_table_from_entity(Product);
    let cart_item_table = schema.create_table_from_entity(CartItem);
    let order_table = schema.create_table_from_entity(Order);
    let refund_table = schema.create_table_from_entity(Refund);
    let upload_table = schema.create_table_from_entity(Upload);
    let feedback_table = schema.create_table_from_entity(Feedback);
    let sequence_table = schema.create_table_from_entity(LedgerSequence);

    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&cart_item_table)).await?;
    db.execute(builder.build(&order_table)).await?;
    db.execute(builder.build(&refund_table)).await?;
    db.execute(builder.build(&upload_table)).await?;
    db.execute(builder.build(&feedback_table)).await?;
    db.execute(builder.build(&sequence_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        feedback::Model as FeedbackModel, order::Model as OrderModel,
        product::Model as ProductModel, refund::Model as RefundModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Every collection must be queryable after schema creation
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<OrderModel> = Order::find().limit(1).all(&db).await?;
        let _: Vec<RefundModel> = Refund::find().limit(1).all(&db).await?;
        let _: Vec<FeedbackModel> = Feedback::find().limit(1).all(&db).await?;
        let _ = CartItem::find().limit(1).all(&db).await?;
        let _ = Upload::find().limit(1).all(&db).await?;
        let _ = LedgerSequence::find().limit(1).all(&db).await?;

        Ok(())
    }
}
