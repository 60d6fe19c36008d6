//! Core business logic - framework-agnostic storefront operations.
//!
//! Each ledger lives in its own module; every function takes the database
//! connection explicitly, and the active [`session::Session`] wherever
//! visibility or authority matters. Nothing here formats output — rendering
//! belongs to whatever front end sits on top.

/// Shopping cart ahead of checkout
pub mod cart;
/// Product catalog management
pub mod catalog;
/// Public customer reviews
pub mod feedback;
/// Order booking, status tracking, and visibility
pub mod order;
/// Refund requests and decisions
pub mod refund;
/// Store activity summary
pub mod report;
/// Initial catalog seeding
pub mod seed;
/// Identifier sequences for the ledgers
pub mod sequence;
/// Ephemeral session and role handling
pub mod session;
/// Client material submissions
pub mod upload;
