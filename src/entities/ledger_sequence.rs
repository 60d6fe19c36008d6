//! Ledger sequence entity - Per-prefix monotonic identifier counters.
//!
//! One row per identifier prefix (`"CLB"`, `"RFD"`, `"UPL"`, `"p"`). The
//! counter value is the next number to hand out, so two records can never
//! share an identifier within one database.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger sequence database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_sequences")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier prefix this counter backs (e.g., `"CLB"`)
    pub prefix: String,
    /// Next value to hand out for this prefix
    pub next_value: i64,
    /// When this counter was last advanced
    pub updated_at: DateTimeUtc,
}

/// Counters have no relationships with other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
