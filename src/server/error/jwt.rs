use thiserror::Error;

/// Errors raised while configuring the JWT service or signing/validating tokens.
#[derive(Error, Debug)]
pub enum JwtError {
    /// Configured secret is shorter than the required minimum.
    #[error("jwt secret length is {length}, which is less than required {required}")]
    SecretTooShort { length: usize, required: usize },

    /// Configured signing method is not one of the supported HMAC algorithms.
    #[error("invalid jwt signing method: {0}")]
    InvalidSigningMethod(String),

    /// Configured token lifetime cannot be represented.
    #[error("jwt duration of {0} minutes is out of range")]
    InvalidDuration(i64),

    /// Token has passed its `exp` claim.
    #[error("Token has expired")]
    Expired,

    /// Token signature does not match.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token was signed with an algorithm other than the configured one.
    #[error("Token algorithm does not match the configured signing method")]
    AlgorithmMismatch,

    /// Failed to encode a token.
    #[error("Failed to encode token: {0}")]
    Encode(String),

    /// Failed to decode a token.
    #[error("Failed to decode token: {0}")]
    Decode(String),
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidAlgorithm => Self::AlgorithmMismatch,
            _ => Self::Decode(err.to_string()),
        }
    }
}
