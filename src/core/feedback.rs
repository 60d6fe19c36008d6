//! Feedback business logic - Public customer reviews.
//!
//! Reviews are public: anyone can submit one and everyone sees the whole
//! board, newest first. There is no session scoping here.

use crate::{
    entities::{Feedback, feedback},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Submits a review.
///
/// # Errors
/// Returns a validation error when name or comment is blank or the rating
/// is outside 1..=5, or an error if the database insert fails.
pub async fn submit_feedback(
    db: &DatabaseConnection,
    name: &str,
    rating: i32,
    comment: &str,
) -> Result<feedback::Model> {
    let name = name.trim();
    let comment = comment.trim();
    if name.is_empty() || comment.is_empty() {
        return Err(Error::Validation {
            message: "feedback name and comment are required".to_string(),
        });
    }

    if !(1..=5).contains(&rating) {
        return Err(Error::Validation {
            message: format!("rating must be between 1 and 5: {rating}"),
        });
    }

    let review = feedback::ActiveModel {
        name: Set(name.to_string()),
        rating: Set(rating),
        comment: Set(comment.to_string()),
        date: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(%name, rating, "feedback submitted");
    Ok(review)
}

/// Lists all reviews, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_feedback(db: &DatabaseConnection) -> Result<Vec<feedback::Model>> {
    Feedback::find()
        .order_by_desc(feedback::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_submit_and_list_newest_first() -> Result<()> {
        let db = setup_test_db().await?;

        submit_feedback(&db, "Asha", 5, "Beautiful edit!").await?;
        submit_feedback(&db, "Rohit", 4, "Fast and creative.").await?;

        let reviews = list_feedback(&db).await?;
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].name, "Rohit");
        assert_eq!(reviews[1].name, "Asha");

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_feedback_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = submit_feedback(&db, "", 5, "Great").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = submit_feedback(&db, "Asha", 5, "   ").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = submit_feedback(&db, "Asha", 0, "Great").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = submit_feedback(&db, "Asha", 6, "Great").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }
}
