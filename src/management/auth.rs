use chrono::Utc;
use reqwest::Client;

use crate::{config::Credentials, error::Result, spotify, types::Token};

/// Seconds before the reported expiry at which a token is replaced.
const EXPIRY_MARGIN: u64 = 60;

/// Holds the client-credentials token for the lifetime of one run.
///
/// The token lives in memory only; a new one is requested on first use and
/// whenever the current one is about to expire.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token_url: impl Into<String>) -> Self {
        TokenManager {
            credentials,
            token_url: token_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    pub async fn get_valid_token(&mut self, client: &Client) -> Result<String> {
        match &self.token {
            Some(token) if !Self::is_expired(token) => Ok(token.access_token.clone()),
            _ => {
                let token =
                    spotify::auth::request_token(client, &self.token_url, &self.credentials)
                        .await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }

    pub fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now.saturating_add(EXPIRY_MARGIN) >= token.obtained_at.saturating_add(token.expires_in)
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
