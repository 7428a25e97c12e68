use payloads::{AUTH_TOKEN_KEY, TokenStore};
use secrecy::{ExposeSecret, SecretString};
use web_sys::Storage;

/// Bearer token kept in the browser's `localStorage`, so a sign-in survives
/// reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokens {
    fn get(&self) -> Option<SecretString> {
        local_storage()?
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    fn set(&self, token: SecretString) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, token not kept");
            return;
        };
        if storage
            .set_item(AUTH_TOKEN_KEY, token.expose_secret())
            .is_err()
        {
            tracing::warn!("failed to store token");
        }
    }

    fn clear(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.remove_item(AUTH_TOKEN_KEY).is_err() {
            tracing::warn!("failed to clear stored token");
        }
    }
}
