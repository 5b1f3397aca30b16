use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::account::AccountError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A syntactically valid email address.
///
/// Stored exactly as supplied: no trimming, no case folding. Two emails are
/// equal only if their bytes are equal.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_PATTERN.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(AccountError::InvalidEmail)
        }
    }
}

impl TryFrom<String> for Email {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(Secret::new(value))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
