use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::services::crypto;
use crate::types::internal::UserRole;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "aidline_session";

/// Server-side session state captured at login
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
    pub created_at: i64,
}

/// In-process session store keyed by opaque session id.
///
/// Sessions live for the process lifetime; logout removes them. The id is
/// carried in a cookie, the state never leaves the server.
#[derive(Debug, Default)]
pub struct SessionService {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for an authenticated user and return its id.
    pub fn create(&self, user_id: i32, email: &str, role: UserRole) -> String {
        let session_id = crypto::generate_session_id();
        let session = Session {
            user_id,
            email: email.to_string(),
            role,
            created_at: Utc::now().timestamp(),
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(session_id.clone(), session);
        session_id
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        sessions.get(session_id).cloned()
    }

    /// Remove a session. Returns whether one existed; logout succeeds either
    /// way.
    pub fn destroy(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(session_id).is_some()
    }

    pub fn count(&self) -> usize {
        let sessions = self.sessions.read().expect("session lock poisoned");
        sessions.len()
    }
}

/// Set-Cookie value carrying a freshly created session id.
pub fn session_cookie(session_id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id)
}

/// Set-Cookie value that expires the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_get_round_trips_session_data() {
        let service = SessionService::new();
        let id = service.create(7, "ngo@example.org", UserRole::Ngo);

        let session = service.get(&id).expect("session should exist");
        assert_eq!(session.user_id, 7);
        assert_eq!(session.email, "ngo@example.org");
        assert_eq!(session.role, UserRole::Ngo);
    }

    #[test]
    fn test_destroy_removes_the_session() {
        let service = SessionService::new();
        let id = service.create(1, "a@b.c", UserRole::Donor);

        assert!(service.destroy(&id));
        assert!(service.get(&id).is_none());
        // Second destroy is a no-op
        assert!(!service.destroy(&id));
    }

    #[test]
    fn test_unknown_session_id_yields_none() {
        let service = SessionService::new();
        assert!(service.get("not-a-session").is_none());
    }

    #[test]
    fn test_each_login_gets_a_distinct_session() {
        let service = SessionService::new();
        let a = service.create(1, "a@b.c", UserRole::Admin);
        let b = service.create(1, "a@b.c", UserRole::Admin);
        assert_ne!(a, b);
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_cookie_strings() {
        let cookie = session_cookie("abc123");
        assert!(cookie.starts_with("aidline_session=abc123"));
        assert!(cookie.contains("HttpOnly"));

        let cleared = clear_session_cookie();
        assert!(cleared.contains("Max-Age=0"));
    }
}
