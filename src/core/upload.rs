//! Upload ledger business logic - Client material submissions.
//!
//! The storefront records what a client submitted (file names and sizes
//! plus a note), never the file contents. Client visibility matches on the
//! contact email or the submitted name, as the original storefront did.

use crate::{
    core::{sequence, session::Session},
    entities::{Upload, upload},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};
use tracing::info;

/// Records a material submission.
///
/// # Errors
/// Returns a validation error when name or contact is blank, or an error if
/// the database insert fails.
pub async fn record_upload(
    db: &DatabaseConnection,
    name: &str,
    contact: &str,
    files: Vec<upload::FileRef>,
    message: &str,
) -> Result<upload::Model> {
    let name = name.trim();
    let contact = contact.trim();
    if name.is_empty() || contact.is_empty() {
        return Err(Error::Validation {
            message: "upload name and contact are required".to_string(),
        });
    }

    let id = sequence::next_id(db, "UPL").await?;
    let recorded = upload::ActiveModel {
        id: Set(id.clone()),
        name: Set(name.to_string()),
        contact: Set(contact.to_string()),
        files: Set(upload::UploadFiles(files)),
        message: Set(message.trim().to_string()),
        date: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    info!(upload_id = %id, %contact, files = recorded.files.0.len(), "upload recorded");
    Ok(recorded)
}

/// Lists the uploads visible to a viewer, most recent first.
///
/// Admin sessions see every upload; client sessions see uploads whose
/// contact matches the session email or whose name matches the session
/// name; no session sees nothing.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_uploads_for(
    db: &DatabaseConnection,
    session: Option<&Session>,
) -> Result<Vec<upload::Model>> {
    let Some(session) = session else {
        return Ok(Vec::new());
    };

    let mut query = Upload::find().order_by_desc(upload::Column::Date);
    if !session.is_admin() {
        query = query.filter(
            Condition::any()
                .add(upload::Column::Contact.eq(session.email.as_str()))
                .add(upload::Column::Name.eq(session.name.as_str())),
        );
    }

    query.all(db).await.map_err(Into::into)
}

/// Deletes an upload record. Admin only.
///
/// # Errors
/// Returns an error if no admin session is active, the record does not
/// exist, or the delete fails.
pub async fn delete_upload(
    db: &DatabaseConnection,
    session: Option<&Session>,
    upload_id: &str,
) -> Result<()> {
    if !session.is_some_and(Session::is_admin) {
        return Err(Error::Auth {
            message: "deleting uploads requires the admin role".to_string(),
        });
    }

    let upload = Upload::find_by_id(upload_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::UploadNotFound {
            upload_id: upload_id.to_string(),
        })?;

    upload.delete(db).await?;
    info!(%upload_id, "upload deleted");
    Ok(())
}
