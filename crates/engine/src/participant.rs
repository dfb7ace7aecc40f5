//! Room participants.
//!
//! A [`Participant`] is an opaque identifier plus the fields used to render a
//! display name. The engine never owns participants: they are supplied per
//! computation by whatever stores the room.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Display name used when an identifier cannot be resolved to a participant.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Opaque participant identifier, unique within a room.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name shown to users: the name if set, otherwise the email, otherwise
    /// [`UNKNOWN_NAME`]. Blank values are skipped.
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }
}

/// Resolves the display name of `id` against `participants`.
pub fn display_name<'a>(participants: &'a [Participant], id: &ParticipantId) -> &'a str {
    participants
        .iter()
        .find(|p| &p.id == id)
        .map_or(UNKNOWN_NAME, Participant::display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email_then_unknown() {
        let named = Participant::new("u1").with_name("Alice").with_email("a@x.io");
        let email_only = Participant::new("u2").with_email("bob@x.io");
        let blank = Participant::new("u3").with_name("  ");
        assert_eq!(named.display_name(), "Alice");
        assert_eq!(email_only.display_name(), "bob@x.io");
        assert_eq!(blank.display_name(), UNKNOWN_NAME);
    }

    #[test]
    fn unresolved_id_is_unknown() {
        let participants = vec![Participant::new("u1").with_name("Alice")];
        assert_eq!(display_name(&participants, &"u1".into()), "Alice");
        assert_eq!(display_name(&participants, &"ghost".into()), UNKNOWN_NAME);
    }
}
