use chrono::Utc;
use reqwest::Client;

use super::{TOKEN_OPERATION, status_error};
use crate::{
    config::Credentials,
    error::{PipelineError, Result},
    types::Token,
};

/// Requests an access token with the client-credentials grant.
///
/// The client identifier and secret travel as HTTP basic auth, the body only
/// carries the grant type. A 400, 401 or 403 means the credentials were
/// rejected.
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| PipelineError::fetch(TOKEN_OPERATION, e))?;

    if let Some(err) = status_error(TOKEN_OPERATION, response.status(), "token endpoint") {
        return Err(err);
    }

    let mut token = response
        .json::<Token>()
        .await
        .map_err(|e| PipelineError::fetch(TOKEN_OPERATION, e))?;
    token.obtained_at = Utc::now().timestamp() as u64;

    Ok(token)
}
