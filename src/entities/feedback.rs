//! Feedback entity - Public customer reviews.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feedback database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Reviewer's name
    pub name: String,
    /// Star rating, 1 through 5
    pub rating: i32,
    /// Review text
    pub comment: String,
    /// When the review was submitted
    pub date: DateTimeUtc,
}

/// Reviews are anonymous records with no relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
