use crate::config::Config;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const TOKEN_URL: &str = "https://accounts.google.com/o/oauth2/token";
/// Percent-encoded `https://mail.google.com/`.
const SCOPE: &str = "https%3A%2F%2Fmail.google.com%2F";
const REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// Slack subtracted from the expiry so a token is refreshed before the
/// server starts rejecting it mid-sync.
const EXPIRY_LEEWAY_SECONDS: u64 = 60;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not read authorization code: {}", source))]
    ReadAuthCode { source: io::Error },

    #[snafu(display("Token request failed: {}", source))]
    TokenRequest { source: ureq::Error },

    #[snafu(display("Could not interpret token response: {}", source))]
    TokenResponse { source: io::Error },

    #[snafu(display("Stored token has no refresh token; delete the cache and re-authorize"))]
    NoRefreshToken {},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The persisted credential blob. The sync engine itself only moves this
/// in and out of the cache.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Unix timestamp past which `access_token` is no longer valid.
    pub expires_at: u64,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        unix_now() + EXPIRY_LEEWAY_SECONDS >= self.expires_at
    }
}

#[derive(Deserialize)]
struct TokenEndpointResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: u64,
}

/// Interactively obtain a token: print the consent URL, read the resulting
/// authorization code from stdin, and exchange it.
pub fn authorize(config: &Config) -> Result<Token> {
    let consent_url = format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent",
        AUTH_URL, config.client_id, REDIRECT_URI, SCOPE,
    );
    println!("Visit the following URL and authorize access to the account:");
    println!();
    println!("{consent_url}");
    println!();
    print!("Enter the authorization code: ");
    io::stdout().flush().context(ReadAuthCodeSnafu {})?;
    let mut code = String::new();
    io::stdin()
        .read_line(&mut code)
        .context(ReadAuthCodeSnafu {})?;

    let response: TokenEndpointResponse = ureq::post(TOKEN_URL)
        .send_form(&[
            ("code", code.trim()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", REDIRECT_URI),
            ("grant_type", "authorization_code"),
        ])
        .context(TokenRequestSnafu {})?
        .into_json()
        .context(TokenResponseSnafu {})?;
    Ok(token_from_response(response, None))
}

/// Exchange the refresh token for a fresh access token.
pub fn refresh(config: &Config, token: &Token) -> Result<Token> {
    let refresh_token = token
        .refresh_token
        .as_deref()
        .context(NoRefreshTokenSnafu {})?;
    let response: TokenEndpointResponse = ureq::post(TOKEN_URL)
        .send_form(&[
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .context(TokenRequestSnafu {})?
        .into_json()
        .context(TokenResponseSnafu {})?;
    // Google omits the refresh token from refresh responses; keep ours.
    Ok(token_from_response(response, token.refresh_token.clone()))
}

fn token_from_response(response: TokenEndpointResponse, fallback_refresh: Option<String>) -> Token {
    Token {
        access_token: response.access_token,
        refresh_token: response.refresh_token.or(fallback_refresh),
        expires_at: unix_now() + response.expires_in,
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_includes_leeway() {
        let fresh = Token {
            access_token: "a".to_string(),
            refresh_token: None,
            expires_at: unix_now() + 3600,
        };
        assert!(!fresh.is_expired());

        let stale = Token {
            access_token: "a".to_string(),
            refresh_token: None,
            expires_at: unix_now() + 30,
        };
        assert!(stale.is_expired());
    }
}
