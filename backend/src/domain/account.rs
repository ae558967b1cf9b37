//! Persisted accounts and the identifiers and filters used to look them up.

use std::fmt;

use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::Credential;

/// Globally unique account identifier.
///
/// Allocated once at registration from a random (v4) UUID; it is never
/// derived from the email or password and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Allocate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored credential plus its identifier.
///
/// Passwords are stored and compared as supplied; this type applies no
/// hashing.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    email: String,
    password: Zeroizing<String>,
    id: AccountId,
}

impl Account {
    /// Wrap a credential into an account with the given identifier.
    pub fn from_credential(credential: &Credential, id: AccountId) -> Self {
        Self {
            email: credential.email().to_owned(),
            password: Zeroizing::new(credential.password().to_owned()),
            id,
        }
    }

    /// Account email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Account identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Whether this account matches `credential` on both fields.
    pub fn matches(&self, credential: &Credential) -> bool {
        self.email() == credential.email() && self.password() == credential.password()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("id", &self.id)
            .finish()
    }
}

/// Partial-field lookup used by [`crate::domain::ports::AccountRepository::find`].
///
/// Unset fields are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFilter {
    /// Required email, if constrained.
    pub email: Option<String>,
    /// Required password, if constrained.
    pub password: Option<String>,
}

impl AccountFilter {
    /// Filter on email only.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: None,
        }
    }

    /// Whether `account` satisfies every constrained field.
    pub fn accepts(&self, account: &Account) -> bool {
        let email_ok = self.email.as_deref().is_none_or(|email| email == account.email());
        let password_ok = self
            .password
            .as_deref()
            .is_none_or(|password| password == account.password());
        email_ok && password_ok
    }
}
