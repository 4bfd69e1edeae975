use std::collections::HashMap;

use crate::utils::session::SessionClient;

// Keyed session storage. The caller owns the lifecycle: put a session
// after a successful login, evict it when the user is done or the login
// fails permanently. Extraction code never touches this.
pub trait SessionStore {
    fn get(&self, user: &str) -> Option<SessionClient>;
    fn put(&mut self, user: &str, session: SessionClient);
    fn evict(&mut self, user: &str);
}

// In-memory store, one live session per user.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<String, SessionClient>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, user: &str) -> Option<SessionClient> {
        // A clone shares the cookie jar, so this hands out the same session.
        self.sessions.get(user).cloned()
    }

    fn put(&mut self, user: &str, session: SessionClient) {
        self.sessions.insert(user.to_string(), session);
    }

    fn evict(&mut self, user: &str) {
        self.sessions.remove(user);
    }
}
