//! User — the root of the hierarchy, owner of houses.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{HouseId, UserId};

/// A person owning zero or more houses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Owned houses, in creation order.
    pub houses: Vec<HouseId>,
}

/// Fields required to create a [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Mutable fields of a [`User`]; both are replaced on update.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
}

/// Check that `email` looks like `local@domain.tld`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] when the address has no `@`,
/// more than one `@`, an empty local part, whitespace, or a domain without a
/// non-empty dotted suffix.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(())
}
