//! Email/password pairs presented for authentication.
//!
//! Handlers and the bearer-token codec both build a [`Credential`] through
//! [`Credential::try_from_parts`], so a credential that reaches the
//! authentication service always has two non-empty fields.

use std::fmt;

use zeroize::Zeroizing;

/// Reasons a credential cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialValidationError {
    /// Email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl CredentialValidationError {
    /// Name of the offending request field.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

/// Transient email/password pair.
///
/// ## Invariants
/// - `email` and `password` are non-empty.
/// - Values are kept exactly as supplied. Stored accounts are compared
///   verbatim, so no trimming or case folding happens here.
///
/// The password is wiped from memory on drop and never printed by `Debug`.
///
/// # Examples
/// ```
/// use auth_gate::domain::Credential;
///
/// let credential = Credential::try_from_parts("a@b.com", "hunter2").unwrap();
/// assert_eq!(credential.email(), "a@b.com");
/// assert!(!format!("{credential:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    email: String,
    password: Zeroizing<String>,
}

impl Credential {
    /// Build a credential from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        if email.is_empty() {
            return Err(CredentialValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address identifying the account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialValidationError::EmptyEmail)]
    #[case("", "", CredentialValidationError::EmptyEmail)]
    #[case("fakeEmail", "", CredentialValidationError::EmptyPassword)]
    fn rejects_empty_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err = Credential::try_from_parts(email, password).expect_err("empty field must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("fakeEmail", "fakePassword")]
    #[case(" padded@example.com ", " spaced password ")]
    fn keeps_values_verbatim(#[case] email: &str, #[case] password: &str) {
        let credential = Credential::try_from_parts(email, password).expect("valid credential");
        assert_eq!(credential.email(), email);
        assert_eq!(credential.password(), password);
    }

    #[rstest]
    fn debug_output_redacts_password() {
        let credential = Credential::try_from_parts("fakeEmail", "s3cret").expect("valid");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("fakeEmail"));
        assert!(!rendered.contains("s3cret"));
    }

    #[rstest]
    fn field_names_match_request_keys() {
        assert_eq!(CredentialValidationError::EmptyEmail.field(), "email");
        assert_eq!(CredentialValidationError::EmptyPassword.field(), "password");
    }
}
