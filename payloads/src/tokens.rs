use secrecy::{ExposeSecret, SecretString};
use std::sync::{Mutex, PoisonError};

/// Key under which the browser keeps the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Persistent storage for the bearer token attached to API requests.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<SecretString>;
    fn set(&self, token: SecretString);
    fn clear(&self);
}

/// Token storage that lives as long as the process. Used natively and in
/// tests; the browser build stores the token in `localStorage`.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(SecretString::from(token.to_owned()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<SecretString> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().to_owned()))
    }

    fn set(&self, token: SecretString) {
        let mut stored =
            self.token.lock().unwrap_or_else(PoisonError::into_inner);
        *stored = Some(token);
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
