use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, Url};

use crate::{
    config::Settings,
    error::CatalogResult,
    spotify::check_status,
    types::Token,
};

/// Builds the Spotify authorization URL the login endpoint redirects to.
///
/// The `state` value comes back untouched on the redirect and identifies the
/// login session that started the flow. Every parameter is percent-encoded.
///
/// # Arguments
///
/// * `settings` - Client ID, redirect URI, scope and authorization endpoint
/// * `state` - Opaque session key generated by the login endpoint
///
/// # Errors
///
/// Returns an error when the configured authorization endpoint is not a
/// valid URL.
///
/// # Example
///
/// ```
/// let url = authorization_url(&settings, "k3J9...")?;
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorization_url(settings: &Settings, state: &str) -> Result<String, String> {
    let url = Url::parse_with_params(
        &settings.auth_url,
        &[
            ("response_type", "code"),
            ("client_id", settings.client_id.as_str()),
            ("scope", settings.scope.as_str()),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| format!("Invalid authorization URL {}: {}", settings.auth_url, e))?;

    Ok(url.to_string())
}

/// Value of the `Authorization` header for client-credential calls.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", credentials)
}

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization-code flow: the client authenticates with HTTP
/// Basic auth (`client_id:client_secret`) and posts the code together with the
/// same redirect URI that was used to obtain it.
///
/// # Errors
///
/// - [`CatalogError::Status`](crate::error::CatalogError::Status) when Spotify
///   rejects the code (expired, reused, redirect URI mismatch)
/// - [`CatalogError::Http`](crate::error::CatalogError::Http) on network or
///   decoding failures
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly, so the exchange
/// happens right inside the redirect handler.
pub async fn exchange_code(http: &Client, settings: &Settings, code: &str) -> CatalogResult<Token> {
    let response = http
        .post(&settings.token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            basic_auth_header(&settings.client_id, &settings.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", settings.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    Ok(check_status(response).await?.json::<Token>().await?)
}
