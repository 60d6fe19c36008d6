//! Refund request entity - One row per client refund request.
//!
//! A request references its order by id string. Requests are never deleted;
//! the only mutation is the admin's approve/reject decision, which may be
//! re-applied (last write wins).

use crate::errors::Error;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Refund request database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "refunds")]
pub struct Model {
    /// Unique refund identifier (e.g., `"RFD100"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Id of the order this request is filed against
    pub order_id: String,
    /// Free-text reason given by the client
    pub reason: String,
    /// Current decision state
    pub status: RefundStatus,
    /// When the request was filed
    pub date: DateTimeUtc,
}

/// Refund decision state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RefundStatus {
    /// Awaiting an admin decision
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Granted by the admin
    #[sea_orm(string_value = "Approved")]
    Approved,
    /// Declined by the admin
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}

impl FromStr for RefundStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(Error::Validation {
                message: format!("unknown refund status: {other}"),
            }),
        }
    }
}

/// The order reference is an id string only; the join happens at read time.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
