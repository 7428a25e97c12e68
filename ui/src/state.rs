use payloads::TokenStore;
use yewdux::prelude::*;

use crate::storage::LocalStorageTokens;

/// App-wide state shared through yewdux.
#[derive(Clone, PartialEq, Store)]
pub struct State {
    /// Whether a bearer token is stored. Says nothing about whether the
    /// backend still accepts it.
    pub signed_in: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            signed_in: LocalStorageTokens.get().is_some(),
        }
    }
}
