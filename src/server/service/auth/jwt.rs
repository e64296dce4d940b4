//! JWT issuance and validation for apartment users.
//!
//! Tokens are HMAC signed with a shared secret and carry the user's name and
//! email. Only the configured algorithm is accepted when validating.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, jwt::JwtError},
    model::apartment_user::ApartmentUser,
};

/// Minimum secret length used when none is configured.
pub const DEFAULT_MIN_SECRET_LENGTH: usize = 128;

const DUMMY_USER_NAME: &str = "ranjeet";
const DUMMY_USER_EMAIL: &str = "ranjeet@123";

/// Claims carried by an apartment user token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
}

/// Signs and validates apartment user tokens.
#[derive(Clone)]
pub struct JwtService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: TimeDelta,
}

impl JwtService {
    /// Creates a JWT service.
    ///
    /// # Arguments
    /// - `algorithm` - `HS256`, `HS384` or `HS512`
    /// - `secret` - HMAC secret
    /// - `ttl_minutes` - Lifetime of issued tokens
    /// - `min_secret_length` - Minimum accepted secret length; `0` keeps
    ///   [`DEFAULT_MIN_SECRET_LENGTH`]
    ///
    /// # Returns
    /// - `Ok(JwtService)` - Configured service
    /// - `Err(JwtError::SecretTooShort)` - Secret is shorter than the minimum
    /// - `Err(JwtError::InvalidSigningMethod)` - Algorithm is not an HMAC algorithm
    /// - `Err(JwtError::InvalidDuration)` - `ttl_minutes` overflows a duration
    pub fn new(
        algorithm: &str,
        secret: &str,
        ttl_minutes: i64,
        min_secret_length: usize,
    ) -> Result<Self, JwtError> {
        let required = if min_secret_length > 0 {
            min_secret_length
        } else {
            DEFAULT_MIN_SECRET_LENGTH
        };

        if secret.len() < required {
            return Err(JwtError::SecretTooShort {
                length: secret.len(),
                required,
            });
        }

        let algorithm = match algorithm {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => return Err(JwtError::InvalidSigningMethod(other.to_string())),
        };

        let ttl =
            TimeDelta::try_minutes(ttl_minutes).ok_or(JwtError::InvalidDuration(ttl_minutes))?;

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for the given user, expiring after the configured lifetime.
    pub fn generate_token(&self, user: &ApartmentUser) -> Result<String, JwtError> {
        self.sign(&user.name, &user.user_email)
    }

    /// Issues a token for the built-in development identity.
    pub fn dummy_token(&self) -> Result<String, JwtError> {
        self.sign(DUMMY_USER_NAME, DUMMY_USER_EMAIL)
    }

    /// Validates an `Authorization` header value of the form `Bearer <token>`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - The token's claims
    /// - `Err(AuthError::MalformedHeader)` - Header is not exactly `Bearer <token>`
    /// - `Err(AuthError::InvalidToken)` - Bad signature, wrong algorithm or expired
    pub fn parse_token(&self, authorization: &str) -> Result<Claims, AuthError> {
        let parts: Vec<&str> = authorization.split(' ').collect();
        let token = match parts.as_slice() {
            ["Bearer", token] if !token.is_empty() => *token,
            _ => return Err(AuthError::MalformedHeader),
        };

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(JwtError::from)?;

        Ok(data.claims)
    }

    fn sign(&self, user_name: &str, user_email: &str) -> Result<String, JwtError> {
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| JwtError::Encode("token expiry is out of range".to_string()))?;

        let claims = Claims {
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Encode(e.to_string()))
    }
}
