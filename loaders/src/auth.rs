//! Google sign-in through the authorization-code flow.
//!
//! The browser is sent to Google's consent screen and comes back to
//! `/login?code=...`; the backend trades the code for a bearer token which
//! is then kept in the client's token store.

use payloads::{APIClient, ClientError, requests::GoogleCallback};
use reqwest::{StatusCode, Url};
use secrecy::SecretString;

const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_SCOPES: &str = "openid email profile";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Sign-in cancelled")]
    Cancelled,
    #[error("{0}")]
    Network(String),
    #[error("Sign-in failed: server returned {}", .0.as_u16())]
    Rejected(StatusCode),
    #[error("Sign-in failed: no token received")]
    MissingToken,
    #[error("Invalid sign-in URL: {0}")]
    BadUrl(String),
}

impl From<ClientError> for SignInError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Cancelled => Self::Cancelled,
            ClientError::Network(e) => Self::Network(e.to_string()),
        }
    }
}

/// Google's consent screen for `client_id`, returning to `redirect_uri`.
pub fn google_authorize_url(
    client_id: &str,
    redirect_uri: &str,
) -> Result<Url, SignInError> {
    Url::parse_with_params(
        GOOGLE_AUTHORIZE_URL,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", GOOGLE_SCOPES),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .map_err(|e| SignInError::BadUrl(e.to_string()))
}

/// The `code` parameter of a redirect's query string, with or without the
/// leading `?`.
pub fn authorization_code(search: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/login").ok()?;
    url.set_query(Some(search.trim_start_matches('?')));
    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
}

/// Trade an authorization code for a bearer token and store it.
///
/// The store is left untouched unless the backend answers with a token.
pub async fn exchange_code(
    client: &APIClient,
    code: &str,
) -> Result<(), SignInError> {
    let response = client
        .google_callback(&GoogleCallback {
            code: code.to_string(),
        })
        .await?;

    if !response.ok {
        tracing::warn!("code exchange answered {}", response.status);
        return Err(SignInError::Rejected(response.status));
    }

    let token = response
        .data
        .and_then(|reply| reply.token)
        .filter(|token| !token.is_empty())
        .ok_or(SignInError::MissingToken)?;
    client.tokens.set(SecretString::from(token));
    tracing::info!("signed in with Google");
    Ok(())
}

pub fn sign_out(client: &APIClient) {
    client.tokens.clear();
    tracing::info!("signed out");
}
