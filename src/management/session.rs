use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{types::ConcertQuery, utils};

/// How long a login may take between `/` and `/redirect`.
pub const SESSION_TTL: Duration = Duration::from_secs(600);

struct PendingLogin {
    query: ConcertQuery,
    created_at: Instant,
}

/// Concert queries of logins that are waiting for their OAuth redirect,
/// keyed by the OAuth `state` value.
#[derive(Clone)]
pub struct SessionStore {
    pending: Arc<Mutex<HashMap<String, PendingLogin>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Stores the query under a fresh state key and returns the key.
    pub async fn begin(&self, query: ConcertQuery) -> String {
        let mut pending = self.pending.lock().await;
        let ttl = self.ttl;
        pending.retain(|_, login| login.created_at.elapsed() < ttl);

        let mut key = utils::generate_state_key();
        while pending.contains_key(&key) {
            key = utils::generate_state_key();
        }

        pending.insert(
            key.clone(),
            PendingLogin {
                query,
                created_at: Instant::now(),
            },
        );
        key
    }

    /// Removes and returns the query for `state`. Each key works once.
    pub async fn take(&self, state: &str) -> Option<ConcertQuery> {
        let login = self.pending.lock().await.remove(state)?;
        if login.created_at.elapsed() >= self.ttl {
            return None;
        }
        Some(login.query)
    }

    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
