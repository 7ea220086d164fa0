// Session model
// Explicit mock-auth session object. Replaces ambient "is authenticated"
// flags: loaded once on startup, cleared on logout.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: Option<String>,
    pub email: String,
    pub signed_in_at: DateTime<Local>,
}

impl Session {
    /// Sign in with any credentials. This is a mock: no verification happens.
    pub fn sign_in(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            signed_in_at: Local::now(),
        }
    }

    /// Register a named account. Also a mock; any input is accepted.
    pub fn register(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::sign_in(email)
        }
    }

    /// Display name for greetings, falling back to the email's local part.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_keeps_email() {
        let session = Session::sign_in("student@nushigh.edu.sg");
        assert_eq!(session.email, "student@nushigh.edu.sg");
        assert!(session.name.is_none());
        assert_eq!(session.display_name(), "student");
    }

    #[test]
    fn register_prefers_name() {
        let session = Session::register("Jia Wei", "jiawei@nushigh.edu.sg");
        assert_eq!(session.display_name(), "Jia Wei");
    }

    #[test]
    fn json_round_trip() {
        let session = Session::register("Jia Wei", "jiawei@nushigh.edu.sg");
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
