//! Store summary reporting.
//!
//! Returns the counts and demo revenue the admin dashboard displays, as
//! structured data with no formatting.

use crate::{
    entities::{Feedback, Order, Upload},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// A snapshot of store activity.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSummary {
    /// Number of booked orders
    pub orders: u64,
    /// Number of recorded uploads
    pub uploads: u64,
    /// Number of submitted reviews
    pub feedback_entries: u64,
    /// Sum of all order totals (demo revenue; refunds are not netted out)
    pub revenue: f64,
}

/// Computes the current store summary.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn store_summary(db: &DatabaseConnection) -> Result<StoreSummary> {
    let orders = Order::find().all(db).await?;
    let revenue = orders.iter().map(|o| o.total).sum();

    Ok(StoreSummary {
        orders: orders.len() as u64,
        uploads: Upload::find().count(db).await?,
        feedback_entries: Feedback::find().count(db).await?,
        revenue,
    })
}
