//! The credential record stored inside a vault.

use zeroize::Zeroize;

/// One stored secret: a service, the account name, and its password.
///
/// Records have no persisted identifier; within a loaded list they are
/// addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Zeroize)]
#[zeroize(drop)]
pub struct CredentialRecord {
    /// The service or site (e.g. "github").
    pub service: String,

    /// The account name used with the service.
    pub username: String,

    /// The stored password.
    pub password: String,
}

impl CredentialRecord {
    pub fn new(
        service: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Name of the first empty field, if any.
    ///
    /// Entries added or edited through the manager must have all three
    /// fields filled in.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        if self.service.is_empty() {
            Some("service")
        } else if self.username.is_empty() {
            Some("username")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        }
    }
}
