// Session service
// Persists the mock-auth session as a JSON file in the platform data
// directory. Load on startup, clear on logout.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::session::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not determine a data directory")]
    NoDataDir,
    #[error("session file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("session file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct SessionService {
    path: PathBuf,
}

impl SessionService {
    pub fn new() -> Result<Self, SessionError> {
        let dirs =
            ProjectDirs::from("sg", "counselpoint", "counselpoint").ok_or(SessionError::NoDataDir)?;
        Ok(Self {
            path: dirs.data_dir().join("session.json"),
        })
    }

    /// Service rooted at an explicit file path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Restore the persisted session, if any. A corrupt file is treated as
    /// signed-out rather than an error the UI has to surface.
    pub fn load(&self) -> Option<Session> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::error!("Failed to read session file: {}", err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("Discarding unreadable session file: {}", err);
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_without_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let service = SessionService::with_path(dir.path().join("session.json"));
        assert!(service.load().is_none());
    }

    #[test]
    fn save_load_clear_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let service = SessionService::with_path(dir.path().join("nested").join("session.json"));

        let session = Session::register("Jia Wei", "jiawei@nushigh.edu.sg");
        service.save(&session).unwrap();
        assert_eq!(service.load(), Some(session));

        service.clear().unwrap();
        assert!(service.load().is_none());
        // Clearing twice is fine.
        service.clear().unwrap();
    }

    #[test]
    fn corrupt_file_treated_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let service = SessionService::with_path(path);
        assert!(service.load().is_none());
    }
}
