//! Session token issuing and validation
//!
//! Tokens are HS256 JWTs whose claims are the caller's payload plus `iat` and `exp`.
//! The server keeps no session state: a token is valid iff its signature matches the
//! secret and it has not expired.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::AppError;

/// Lifetime of every issued token (1 hour)
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Payload carried by session tokens issued at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Authenticated user ID
    pub id: Uuid,
}

impl SessionPayload {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Claim names owned by the token envelope
const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

#[derive(Deserialize)]
struct VerifiedClaims<T> {
    #[serde(flatten)]
    payload: T,
    iat: i64,
    exp: i64,
}

/// Issues and validates signed, time-limited session tokens
///
/// The payload is any type that serializes as a map (a struct or a JSON object).
/// Payloads with an `iat` or `exp` field are rejected.
#[derive(Clone)]
pub struct Authenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Authenticator {
    /// Create an authenticator for the given secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create an authenticator from configuration
    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret)
    }

    /// Sign a token for `payload`, expiring one hour from now
    ///
    /// # Errors
    /// Returns an error if the payload cannot be encoded as JWT claims
    pub fn generate_token<T: Serialize>(&self, payload: &T) -> Result<String, AppError> {
        self.sign_at(payload, Utc::now())
    }

    fn sign_at<T: Serialize>(
        &self,
        payload: &T,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let mut claims = match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(encode_error("payload must serialize as a map")),
            Err(e) => return Err(encode_error(e)),
        };

        // A duplicated claim would make the token unverifiable
        if let Some(key) = RESERVED_CLAIMS.iter().find(|k| claims.contains_key(**k)) {
            return Err(encode_error(format!("payload must not contain `{key}`")));
        }

        claims.insert("iat".to_string(), issued_at.timestamp().into());
        claims.insert(
            "exp".to_string(),
            (issued_at + Duration::seconds(TOKEN_TTL_SECONDS))
                .timestamp()
                .into(),
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(encode_error)
    }

    /// Decode `token` and return its payload
    ///
    /// Returns `None` for malformed, forged, and expired tokens alike.
    pub fn validate_token<T: DeserializeOwned>(&self, token: &str) -> Option<T> {
        match decode::<VerifiedClaims<T>>(token, &self.decoding_key, &self.validation) {
            Ok(data) => {
                debug!(
                    issued_at = data.claims.iat,
                    expires_at = data.claims.exp,
                    "Session token accepted"
                );
                Some(data.claims.payload)
            }
            Err(e) => {
                debug!(reason = ?e.kind(), "Session token rejected");
                None
            }
        }
    }
}

fn encode_error(reason: impl std::fmt::Display) -> AppError {
    AppError::Internal(anyhow::anyhow!("Failed to encode session token: {reason}"))
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("token_ttl_seconds", &TOKEN_TTL_SECONDS)
            .finish_non_exhaustive()
    }
}
