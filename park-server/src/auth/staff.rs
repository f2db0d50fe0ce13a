//! Staff accounts.

use std::collections::HashMap;
use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// What a staff member may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May change the ride catalog.
    Admin,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Account {
    digest: Vec<u8>,
    role: Role,
}

/// In-memory staff directory.
///
/// Passwords are never stored; each account keeps an HMAC-SHA256 of the
/// password keyed by its staff id.
#[derive(Default)]
pub struct StaffDirectory {
    accounts: HashMap<String, Account>,
}

fn password_mac(staff_id: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(staff_id.as_bytes()).expect("HMAC accepts any key length")
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an account.
    pub fn insert(&mut self, staff_id: &str, password: &str, role: Role) {
        let mut mac = password_mac(staff_id);
        mac.update(password.as_bytes());
        let digest = mac.finalize().into_bytes().to_vec();

        self.accounts
            .insert(staff_id.to_string(), Account { digest, role });
    }

    /// Check a password. Returns the account's role on success.
    ///
    /// The digest comparison is constant time.
    pub fn authenticate(&self, staff_id: &str, password: &str) -> Result<Role, AuthError> {
        let account = self.accounts.get(staff_id).ok_or(AuthError::InvalidLogin)?;

        let mut mac = password_mac(staff_id);
        mac.update(password.as_bytes());
        mac.verify_slice(&account.digest)
            .map_err(|_| AuthError::InvalidLogin)?;

        Ok(account.role)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
