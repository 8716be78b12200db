//! Shared state handed to every request handler.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use rusqlite::Connection;
use sha2::{Digest, Sha512};

use crate::{Error, db::initialize};

/// Everything a handler may need. Handlers extract the parts they use
/// through their own state structs and [FromRef].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Encrypts the flash message cookie.
    pub cookie_key: Key,

    /// Canonical IANA name of the timezone used for "today", e.g. "Asia/Kolkata".
    pub local_timezone: String,

    /// The expense store.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Build the state around `db_connection`, creating the expense table
    /// if it does not exist yet.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the schema cannot be created.
    pub fn new(
        db_connection: Connection,
        cookie_secret: &str,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let db_connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            cookie_key: create_cookie_key(cookie_secret),
            local_timezone: local_timezone.to_owned(),
            db_connection,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Derive the private cookie key from `secret`.
///
/// The same secret always gives the same key, so flash cookies survive
/// a server restart.
pub fn create_cookie_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}
