//! Identifier generation for the ledgers.
//!
//! Each record family draws its identifiers from a per-prefix monotonic
//! counter (`"CLB"` for orders, `"RFD"` for refunds, `"UPL"` for uploads,
//! `"p"` for products), so two records can never share an identifier within
//! one database. Counters start at 100, which keeps the familiar
//! `PREFIX###` shape and simply widens past 999 (`CLB999`, `CLB1000`, ...).

use crate::{
    entities::{LedgerSequence, ledger_sequence},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

/// First value handed out for a fresh prefix.
const SEQUENCE_START: i64 = 100;

/// Draws the next identifier for the given prefix.
///
/// Generic over [`ConnectionTrait`] so it can run inside an open database
/// transaction; order creation draws its id in the same transaction that
/// books the order and clears the cart.
///
/// # Errors
/// Returns an error if the counter row cannot be read or advanced.
pub async fn next_id<C>(db: &C, prefix: &str) -> Result<String>
where
    C: ConnectionTrait,
{
    let existing = LedgerSequence::find()
        .filter(ledger_sequence::Column::Prefix.eq(prefix))
        .one(db)
        .await?;

    let now = chrono::Utc::now();
    let value = match existing {
        Some(row) => {
            let value = row.next_value;
            let mut counter: ledger_sequence::ActiveModel = row.into();
            counter.next_value = Set(value + 1);
            counter.updated_at = Set(now);
            counter.update(db).await?;
            value
        }
        None => {
            let counter = ledger_sequence::ActiveModel {
                prefix: Set(prefix.to_string()),
                next_value: Set(SEQUENCE_START + 1),
                updated_at: Set(now),
                ..Default::default()
            };
            counter.insert(db).await?;
            SEQUENCE_START
        }
    };

    Ok(format!("{prefix}{value:03}"))
}
