//! Typed failures of the authentication triad.
//!
//! Callers match on the variant to choose a response; nothing here is
//! signalled by panicking or by stringly-typed errors.

use crate::domain::TokenError;
use crate::domain::ports::AccountRepositoryError;

/// Failure raised by the token codec, the authentication service, or the
/// repository behind it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// `Authorization` header lacks the bearer prefix or a token.
    #[error("Malformed authorization header")]
    MalformedHeader,
    /// Token is not base64 or does not split into email and password.
    #[error("Malformed token")]
    MalformedToken,
    /// Token decoded to an empty email or password.
    #[error("Missing token information")]
    MissingCredentialField,
    /// No account matches the presented credential.
    #[error("Unable to authenticate user {email}")]
    AuthenticationFailed {
        /// Email that was presented.
        email: String,
    },
    /// No account is registered under the email.
    #[error("Unable to find user with email {email}")]
    UserNotFound {
        /// Email that was looked up.
        email: String,
    },
    /// Repository failure, passed through untouched.
    #[error(transparent)]
    Backend(#[from] AccountRepositoryError),
}

impl AuthError {
    /// Build [`AuthError::AuthenticationFailed`].
    pub fn authentication_failed(email: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            email: email.into(),
        }
    }

    /// Build [`AuthError::UserNotFound`].
    pub fn user_not_found(email: impl Into<String>) -> Self {
        Self::UserNotFound {
            email: email.into(),
        }
    }

    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedHeader => "malformed_header",
            Self::MalformedToken => "malformed_token",
            Self::MissingCredentialField => "missing_credential_field",
            Self::AuthenticationFailed { .. } => "authentication_failed",
            Self::UserNotFound { .. } => "user_not_found",
            Self::Backend(_) => "backend",
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(value: TokenError) -> Self {
        match value {
            TokenError::MalformedHeader => Self::MalformedHeader,
            TokenError::MalformedToken | TokenError::DelimiterInCredential => Self::MalformedToken,
            TokenError::MissingCredentialField => Self::MissingCredentialField,
        }
    }
}
