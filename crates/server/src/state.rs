use homeward::{access::Gate, repository::Repository};
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct AppState {
    pub repository: Repository,
    pub gate: Gate,
    // Logged in sessions
    sessions: RwLock<HashSet<Uuid>>,
}

impl AppState {
    pub fn new(repository: Repository, gate: Gate) -> Self {
        Self {
            repository,
            gate,
            sessions: RwLock::new(HashSet::new()),
        }
    }

    pub async fn open_session(&self) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.write().await.insert(token);
        token
    }

    pub async fn close_session(&self, token: &Uuid) -> bool {
        self.sessions.write().await.remove(token)
    }

    pub async fn is_logged_in(&self, token: &Uuid) -> bool {
        self.sessions.read().await.contains(token)
    }
}
