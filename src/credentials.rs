//! Credential Store
//!
//! Reads the single Shopify credential row from the local SQLite database.

use std::fmt;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::info;

use crate::error::{AppError, Result};

/// Tenant row the service serves.
pub const CREDENTIAL_ID: i64 = 1;

/// Shopify store domain and Admin API token.
#[derive(Clone)]
pub struct Credential {
    pub store: String,
    pub access_token: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("store", &self.store)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Opens `path` read-only and loads the credential with id [`CREDENTIAL_ID`].
///
/// A missing file, missing table or missing row are all errors; the caller
/// is expected to abort startup.
pub fn load_credential(path: &Path) -> Result<Credential> {
    info!(path = %path.display(), "Reading Shopify credentials");

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    conn.query_row(
        "SELECT store, access_token FROM shopify_credentials WHERE id = ?1",
        [CREDENTIAL_ID],
        |row| {
            Ok(Credential {
                store: row.get(0)?,
                access_token: row.get(1)?,
            })
        },
    )
    .optional()?
    .ok_or(AppError::CredentialMissing { id: CREDENTIAL_ID })
}
