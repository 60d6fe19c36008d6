//! Upload entity - Records of client material submissions.
//!
//! Only file metadata (name and size) is kept; the storefront never stores
//! blobs. Ownership for client visibility is matched on contact email or
//! submitted name.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Upload database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "uploads")]
pub struct Model {
    /// Unique upload identifier (e.g., `"UPL100"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Name the client submitted with
    pub name: String,
    /// Contact address, usually an email
    pub contact: String,
    /// Metadata of the submitted files
    #[sea_orm(column_type = "Json")]
    pub files: UploadFiles,
    /// Optional note accompanying the submission
    pub message: String,
    /// When the submission was recorded
    pub date: DateTimeUtc,
}

/// Name and size of one submitted file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Original file name
    pub name: String,
    /// Size in bytes
    pub size: i64,
}

/// The upload's file list, stored as a JSON column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct UploadFiles(pub Vec<FileRef>);

/// Uploads stand alone; they are tied to clients only by the contact string.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
