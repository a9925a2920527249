use crate::{error, session::Session, success};

/// Exchanges the configured client credentials once and reports the result.
pub async fn auth(session: &mut Session) {
    match session.spotify.tokens.get_token().await {
        Ok(_) => {
            let expires_in = session
                .spotify
                .tokens
                .current_token()
                .map(|t| t.expires_in)
                .unwrap_or_default();
            success!(
                "Authentication successful! Token valid for {} seconds.",
                expires_in
            );
        }
        Err(e) => error!("{}", e),
    }
}
