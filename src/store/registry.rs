//! Mock user registry over a `KeyValueStore`.
//!
//! Passwords are stored and compared as plain text. This is a local demo
//! registry, not an authentication system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::store::kv::{KeyValueStore, SESSION_KEY, USERS_KEY};

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

/// Stored account: the public view plus the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Account {
    #[serde(flatten)]
    pub(crate) user: User,
    pub(crate) password: String,
}

pub struct UserRegistry<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UserRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Register a new account and log it in. Fails if the email is taken.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::invalid_argument("Name, email and password are all required."));
        }

        let mut accounts = self.accounts()?;
        if accounts.iter().any(|a| a.user.email == email) {
            return Err(AppError::store(format!("An account for '{email}' already exists.")));
        }

        let now = Utc::now();
        let user = User {
            id: next_id(&accounts, now),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
        };
        accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        self.save_accounts(&accounts)?;
        self.set_session(&user)?;

        info!(id = %user.id, "registered user");
        Ok(user)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim();
        let user = self
            .accounts()?
            .into_iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user)
            .ok_or_else(|| AppError::store("Invalid email or password."))?;
        self.set_session(&user)?;
        info!(id = %user.id, "logged in");
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.store.remove(SESSION_KEY)
    }

    pub fn current_user(&self) -> Result<Option<User>, AppError> {
        match self.store.get(SESSION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| AppError::store(format!("Corrupt `{SESSION_KEY}` entry: {e}"))),
            None => Ok(None),
        }
    }

    pub fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store.list_users()
    }

    fn accounts(&self) -> Result<Vec<Account>, AppError> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::store(format!("Corrupt `{USERS_KEY}` entry: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    fn save_accounts(&mut self, accounts: &[Account]) -> Result<(), AppError> {
        let raw = serde_json::to_string(accounts)
            .map_err(|e| AppError::store(format!("Failed to serialize users: {e}")))?;
        self.store.set(USERS_KEY, raw)
    }

    fn set_session(&mut self, user: &User) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| AppError::store(format!("Failed to serialize session: {e}")))?;
        self.store.set(SESSION_KEY, raw)
    }
}

/// Millisecond timestamp id, bumped past any existing id on collision.
fn next_id(accounts: &[Account], now: DateTime<Utc>) -> String {
    let mut id = now.timestamp_millis();
    while accounts.iter().any(|a| a.user.id == id.to_string()) {
        id += 1;
    }
    id.to_string()
}
