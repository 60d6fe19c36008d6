//! Session and identity handling.
//!
//! This is a *simulated* identity layer, carried over from the original
//! storefront demo: the admin role is gated by one shared passphrase and
//! clients identify themselves with nothing but a name and an email. The
//! session exists only as an in-memory value for the lifetime of the caller;
//! it is never persisted. Its email string scopes which orders, refunds and
//! uploads a viewer may see — it is an ownership filter key, not a security
//! boundary, and must not be silently upgraded into one.

use crate::errors::{Error, Result};
use tracing::{debug, info};

/// Viewer role attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Sees and manages all records
    Admin,
    /// Sees only records owned by the session email
    Client,
}

/// An ephemeral identity used to scope visibility and authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Display name given at login
    pub name: String,
    /// Ownership key for visibility filtering
    pub email: String,
    /// Viewer role
    pub role: Role,
}

impl Session {
    /// Whether this session carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Establishes an ephemeral session.
///
/// Clients need only a non-empty name and email; there is no password and no
/// check that the email belongs to the caller. The admin role additionally
/// requires the shared passphrase from the settings.
///
/// # Errors
/// Returns a validation error when name or email is blank, and an auth error
/// when the admin passphrase is missing or wrong.
pub fn login(
    name: &str,
    email: &str,
    role: Role,
    passphrase: Option<&str>,
    admin_passphrase: &str,
) -> Result<Session> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() || email.is_empty() {
        return Err(Error::Validation {
            message: "name and email are required to log in".to_string(),
        });
    }

    if role == Role::Admin && passphrase != Some(admin_passphrase) {
        return Err(Error::Auth {
            message: "invalid admin passphrase".to_string(),
        });
    }

    info!(%name, ?role, "session established");
    Ok(Session {
        name: name.to_string(),
        email: email.to_string(),
        role,
    })
}

/// Discards an ephemeral session.
///
/// There is no server-side state to invalidate; dropping the value is the
/// whole operation.
pub fn logout(session: Session) {
    debug!(name = %session.name, "session discarded");
    drop(session);
}
