//! Signed-in user identity.
//!
//! The session is owned by the application shell and handed to screens
//! read-only. Screens never mutate it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub profile: Profile,
}

impl User {
    pub fn new(id: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: Profile {
                country: country.into(),
            },
        }
    }
}

/// The current authentication context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The user id, or `None` when signed out or the id is blank
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.id.trim())
            .filter(|id| !id.is_empty())
    }

    /// The profile country, or `None` when unknown
    pub fn country(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.profile.country.trim())
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_has_no_id() {
        let session = Session::anonymous();
        assert_eq!(session.user_id(), None);
        assert_eq!(session.country(), None);
    }

    #[test]
    fn test_blank_id_counts_as_missing() {
        let session = Session::new(Some(User::new("   ", "UK")));
        assert_eq!(session.user_id(), None);
        assert_eq!(session.country(), Some("UK"));
    }

    #[test]
    fn test_signed_in_session() {
        let session = Session::new(Some(User::new("42", "Germany")));
        assert_eq!(session.user_id(), Some("42"));
        assert_eq!(session.country(), Some("Germany"));
    }
}
