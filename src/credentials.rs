/// Personal token storage in the platform credential store.
use keyring::Entry;

/// Keyring service name the token is stored under.
pub const SERVICE: &str = "opencollective-export";

/// Keyring account name the token is stored under.
pub const ACCOUNT: &str = "token";

/// Somewhere a single personal token can be read from and written to.
pub trait TokenStore {
    /// Read the stored token, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the store cannot be accessed.
    fn get(&self) -> Result<Option<String>, keyring::Error>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the store cannot be written.
    fn set(&self, token: &str) -> Result<(), keyring::Error>;
}

/// The system keyring entry `opencollective-export` / `token`.
pub struct KeyringStore {
    entry: Entry,
}

impl KeyringStore {
    /// Open the entry. Does not touch the stored secret.
    ///
    /// # Errors
    ///
    /// Returns `keyring::Error` if no credential backend is available.
    pub fn open() -> Result<Self, keyring::Error> {
        Ok(Self {
            entry: Entry::new(SERVICE, ACCOUNT)?,
        })
    }
}

impl TokenStore for KeyringStore {
    fn get(&self) -> Result<Option<String>, keyring::Error> {
        match self.entry.get_password() {
            Ok(token) if token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, token: &str) -> Result<(), keyring::Error> {
        tracing::debug!(service = SERVICE, account = ACCOUNT, "storing token in keyring");
        self.entry.set_password(token)
    }
}
