// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-backed session store.
//
// One token in one JSON file, surviving restarts until explicit logout.
// There is no refresh and no expiry tracking; a stale token shows up as a
// 401 on the next authenticated call.

use std::path::{Path, PathBuf};

use hizmetpanel_core::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Holds the bearer token and mirrors it to disk.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    token: Option<String>,
}

impl SessionStore {
    /// Load the session from `path`. A missing or unreadable file just
    /// means no one is logged in.
    pub fn load(path: PathBuf) -> Self {
        let token = read_token(&path);
        if token.is_some() {
            debug!(path = %path.display(), "restored session token");
        }
        Self { path, token }
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Store a token and persist it. The in-memory token is set even when
    /// persisting fails, so a disk problem does not reject a valid login —
    /// the session is just not durable for this run.
    pub fn set_token(&mut self, token: String) -> Result<()> {
        let json = serde_json::to_string(&StoredSession {
            token: token.clone(),
        })?;
        self.token = Some(token);
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Drop the token and delete the file. Synchronous, no backend call.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn read_token(path: &Path) -> Option<String> {
    let data = std::fs::read_to_string(path).ok()?;
    let stored: StoredSession = serde_json::from_str(&data).ok()?;
    Some(stored.token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("session.json")
    }

    #[test]
    fn missing_file_means_unauthenticated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::load(session_path(&dir));
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn token_survives_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = session_path(&dir);

        let mut store = SessionStore::load(path.clone());
        store.set_token("authenticated".into()).expect("persist");
        assert!(store.is_authenticated());

        let reloaded = SessionStore::load(path);
        assert_eq!(reloaded.token(), Some("authenticated"));
    }

    #[test]
    fn clear_removes_token_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = session_path(&dir);

        let mut store = SessionStore::load(path.clone());
        store.set_token("authenticated".into()).expect("persist");
        store.clear().expect("clear");
        assert!(!store.is_authenticated());

        let reloaded = SessionStore::load(path);
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SessionStore::load(session_path(&dir));
        store.clear().expect("clear with nothing stored");
        store.clear().expect("clear again");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn corrupt_file_is_treated_as_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = session_path(&dir);
        std::fs::write(&path, "not json at all").expect("write");

        let store = SessionStore::load(path);
        assert!(!store.is_authenticated());
    }
}
