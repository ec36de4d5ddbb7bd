use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use moka::future::Cache;
use tracing::info;
use uuid::Uuid;

use crate::{models::Session, utils::auto_logout::AutoLogout};

struct SessionEntry {
    session: RwLock<Session>,
    idle: AutoLogout,
}

/// Server-side sessions keyed by the access token's `jti`.
///
/// Entries expire with the token; a session also ends after `idle_timeout`
/// without an authenticated request.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<String, Arc<SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration, idle_timeout: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(100_000)
                .time_to_live(ttl)
                .build(),
            idle_timeout,
        }
    }

    /// Stores `session` and returns its new id.
    pub async fn open(&self, session: Session) -> String {
        let session_id = Uuid::new_v4().to_string();

        let cache = self.cache.clone();
        let key = session_id.clone();
        let idle = AutoLogout::start(self.idle_timeout, move || {
            let cache = cache.clone();
            let key = key.clone();
            async move {
                info!(session_id = %key, "Session idle, logging out");
                cache.invalidate(&key).await;
            }
        });

        info!(user_id = session.user_id, company_id = session.company_id, "Session opened");
        self.cache
            .insert(
                session_id.clone(),
                Arc::new(SessionEntry {
                    session: RwLock::new(session),
                    idle,
                }),
            )
            .await;
        session_id
    }

    /// Looks up a live session and counts the call as user activity.
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let entry = self.cache.get(session_id).await?;
        entry.idle.activity();
        let session = entry
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Some(session)
    }

    /// Replaces the stored profile. Returns false if the session is gone.
    pub async fn update(&self, session_id: &str, session: Session) -> bool {
        let Some(entry) = self.cache.get(session_id).await else {
            return false;
        };
        *entry.session.write().unwrap_or_else(PoisonError::into_inner) = session;
        true
    }

    pub async fn close(&self, session_id: &str) {
        if let Some(entry) = self.cache.remove(session_id).await {
            entry.idle.stop();
            info!(session_id, "Session closed");
        }
    }
}
