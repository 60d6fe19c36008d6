//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod cart_item;
pub mod feedback;
pub mod ledger_sequence;
pub mod order;
pub mod product;
pub mod refund;
pub mod upload;

// Re-export specific types to avoid conflicts
pub use cart_item::{Column as CartItemColumn, Entity as CartItem, Model as CartItemModel};
pub use feedback::{Column as FeedbackColumn, Entity as Feedback, Model as FeedbackModel};
pub use ledger_sequence::{
    Column as LedgerSequenceColumn, Entity as LedgerSequence, Model as LedgerSequenceModel,
};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel, OrderStatus};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use refund::{Column as RefundColumn, Entity as Refund, Model as RefundModel, RefundStatus};
pub use upload::{Column as UploadColumn, Entity as Upload, Model as UploadModel};
