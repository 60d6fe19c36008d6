//! Order entity - The system of record for bookings.
//!
//! An order snapshots title and price of every cart line at booking time,
//! decoupled from the live product catalog. The total is computed once at
//! creation and never recomputed. Orders are never deleted; the only
//! mutation after creation is a status reassignment.

use crate::errors::Error;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique order identifier (e.g., `"CLB100"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
    /// Name of the client who booked the order
    pub client_name: String,
    /// Email of the client; the sole ownership key for visibility filtering
    pub client_email: String,
    /// Line items snapshotted at booking time
    #[sea_orm(column_type = "Json")]
    pub items: OrderItems,
    /// Sum of item price x qty, fixed at creation
    pub total: f64,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// When the order was booked
    pub date: DateTimeUtc,
}

/// One snapshotted line of an order: title and unit price as they were when
/// the client booked, regardless of later catalog changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product title at booking time
    pub title: String,
    /// Unit price at booking time
    pub price: f64,
    /// Quantity ordered
    pub qty: i32,
}

/// The order's item list, stored as a JSON column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct OrderItems(pub Vec<OrderItem>);

/// Order lifecycle status.
///
/// Every status is reachable from every other; the vocabulary is closed but
/// the transition graph is intentionally not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    /// Booked, not yet picked up by the studio
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Being edited
    #[sea_orm(string_value = "In Progress")]
    InProgress,
    /// Edit finished, ready for delivery
    #[sea_orm(string_value = "Completed")]
    Completed,
    /// Handed over to the client
    #[sea_orm(string_value = "Delivered")]
    Delivered,
}

impl OrderStatus {
    /// The delivery estimate shown when tracking an order in this status.
    #[must_use]
    pub const fn estimated_delivery(self) -> &'static str {
        match self {
            Self::Pending => "2 days",
            Self::InProgress => "1 day",
            Self::Completed => "Ready for Delivery",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Delivered => "Delivered",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    /// Parses exactly the four display strings; anything else is a
    /// validation error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Delivered" => Ok(Self::Delivered),
            other => Err(Error::Validation {
                message: format!("unknown order status: {other}"),
            }),
        }
    }
}

/// Orders reference products only through their snapshots; refunds reference
/// orders by id string without a schema-level constraint.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
