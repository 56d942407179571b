//! HTTP Basic Authentication header for requests to the image server.
//!
//! The header value is `Basic <base64(username:password)>` using the standard
//! Base64 alphabet with padding. Credentials are passed through untouched:
//! no character set checks, no trimming, no redaction.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::Serialize;
use thiserror::Error;

/// Name of the HTTP header carrying the credentials.
pub const AUTHORIZATION: &str = "Authorization";

const BASIC_PREFIX: &str = "Basic ";

/// Error types for reading a Basic header back.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The value does not start with the `Basic ` scheme.
    #[error("Missing Basic authentication scheme")]
    MissingScheme,

    /// The encoded part is not valid Base64.
    #[error("Invalid Base64 credentials: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The decoded credentials are not UTF-8.
    #[error("Credentials are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// No `:` separates the username from the password.
    #[error("Credentials are missing the ':' separator")]
    MissingSeparator,
}

/// Header map with a single `Authorization` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthHeader {
    #[serde(rename = "Authorization")]
    authorization: String,
}

impl AuthHeader {
    /// The full header value, including the `Basic ` prefix.
    pub fn value(&self) -> &str {
        &self.authorization
    }

    /// Header name and value, ready to hand to an HTTP client.
    pub fn into_pairs(self) -> (&'static str, String) {
        (AUTHORIZATION, self.authorization)
    }
}

/// Username and password recovered from a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Base64 encoding of `username:password`.
pub fn basic_credentials(username: &str, password: &str) -> String {
    BASE64_STANDARD.encode(format!("{username}:{password}"))
}

/// Build the `Authorization` header for the given credentials.
///
/// # Example
///
/// ```
/// use explorer_core::auth::get_auth_header;
///
/// let header = get_auth_header("user", "pass");
/// assert_eq!(header.value(), "Basic dXNlcjpwYXNz");
/// ```
pub fn get_auth_header(username: &str, password: &str) -> AuthHeader {
    AuthHeader {
        authorization: format!("{BASIC_PREFIX}{}", basic_credentials(username, password)),
    }
}

/// Decode a `Basic ...` header value into its credentials.
///
/// The username ends at the first `:`; everything after it is the password,
/// so passwords may themselves contain colons.
pub fn parse_basic_auth(value: &str) -> Result<Credentials, AuthError> {
    let encoded = value
        .strip_prefix(BASIC_PREFIX)
        .ok_or(AuthError::MissingScheme)?;
    let decoded = String::from_utf8(BASE64_STANDARD.decode(encoded.trim())?)?;
    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MissingSeparator)?;

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the header always decodes back to the same credentials.
        #[test]
        fn prop_header_decodes_to_credentials(
            username in "[^:]{0,32}",
            password in ".{0,32}",
        ) {
            let header = get_auth_header(&username, &password);
            prop_assert!(header.value().starts_with("Basic "));

            let creds = parse_basic_auth(header.value()).unwrap();
            prop_assert_eq!(creds.username, username);
            prop_assert_eq!(creds.password, password);
        }
    }
}
