use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    debug,
    error::ApiError,
    types::{Credentials, Token, TokenResponse},
    utils,
};

/// Lifetime assumed when neither configuration nor the endpoint provide one.
pub const DEFAULT_TOKEN_TTL: u64 = 3600;

/// Exchanges client credentials for an access token.
///
/// Sends one `POST` to `token_url` with `Authorization: Basic
/// base64(client_id:client_secret)` and the form body
/// `grant_type=client_credentials`.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret
/// * `ttl_override` - Lifetime to record instead of the `expires_in` of the response
///
/// # Errors
///
/// Every failure (network error, non-2xx status, malformed body, empty token)
/// is reported as [`ApiError::Auth`] carrying the underlying cause.
pub async fn request_client_credentials_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
    ttl_override: Option<u64>,
) -> Result<Token, ApiError> {
    debug!("Requesting client credentials token from {}", token_url);

    let res = client
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {}", credentials.basic_auth()))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Auth(format!(
            "token endpoint returned {}: {}",
            status,
            utils::error_message_from_body(&body)
        )));
    }

    let json: TokenResponse = res
        .json()
        .await
        .map_err(|e| ApiError::Auth(format!("malformed token response: {}", e)))?;

    if json.access_token.is_empty() {
        return Err(ApiError::Auth(
            "token endpoint returned an empty access token".to_string(),
        ));
    }

    Ok(Token {
        access_token: json.access_token,
        token_type: if json.token_type.is_empty() {
            "Bearer".to_string()
        } else {
            json.token_type
        },
        expires_in: ttl_override
            .or(json.expires_in)
            .unwrap_or(DEFAULT_TOKEN_TTL),
        obtained_at: utils::now_timestamp(),
    })
}
