//! Initial data seeding from the catalog configuration.
//!
//! Seeds the product catalog and the sample review board on boot, each only
//! when its table is empty, so a restart never duplicates or overwrites
//! live data.

use crate::{
    config::catalog::CatalogConfig,
    entities::{Feedback, Product, feedback, product},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

/// Seeds products and sample feedback from the catalog configuration.
///
/// # Errors
/// Returns an error if a database query or insert fails.
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<()> {
    if Product::find().count(db).await? == 0 && !config.products.is_empty() {
        let models: Vec<product::ActiveModel> = config
            .products
            .iter()
            .map(|seed| product::ActiveModel {
                id: Set(seed.id.clone()),
                title: Set(seed.title.clone()),
                description: Set(seed.description.clone()),
                old_price: Set(seed.old_price),
                price: Set(seed.price),
            })
            .collect();
        Product::insert_many(models).exec(db).await?;
        info!(count = config.products.len(), "catalog seeded");
    }

    if Feedback::find().count(db).await? == 0 && !config.feedback.is_empty() {
        let now = chrono::Utc::now();
        let models: Vec<feedback::ActiveModel> = config
            .feedback
            .iter()
            .map(|seed| feedback::ActiveModel {
                name: Set(seed.name.clone()),
                rating: Set(seed.rating),
                comment: Set(seed.comment.clone()),
                date: Set(now),
                ..Default::default()
            })
            .collect();
        Feedback::insert_many(models).exec(db).await?;
        info!(count = config.feedback.len(), "sample feedback seeded");
    }

    Ok(())
}
