use super::controller::UploadSelection;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const IDLE_TIMEOUT_MINUTES: i64 = 30;

struct Entry {
    selection: UploadSelection,
    touched_at: DateTime<Utc>,
}

/// Per-session upload selections, keyed by session token.
///
/// Entries untouched for `IDLE_TIMEOUT_MINUTES` are evicted on the next
/// read or write.
#[derive(Clone, Default)]
pub struct SelectionStore {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
}

fn evict_idle(entries: &mut HashMap<String, Entry>, now: DateTime<Utc>) {
    let before = entries.len();
    entries.retain(|_, entry| now - entry.touched_at < Duration::minutes(IDLE_TIMEOUT_MINUTES));

    let evicted = before - entries.len();
    if evicted > 0 {
        tracing::debug!("Evicted {} idle upload selections", evicted);
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection for `token`, with expired notifications dropped.
    pub async fn snapshot(&self, token: &str, now: DateTime<Utc>) -> UploadSelection {
        let mut entries = self.inner.lock().await;
        evict_idle(&mut entries, now);

        match entries.get_mut(token) {
            Some(entry) => {
                entry.touched_at = now;
                entry.selection.dismiss_expired(now);
                entry.selection.clone()
            }
            None => UploadSelection::default(),
        }
    }

    pub async fn update<F, T>(&self, token: &str, now: DateTime<Utc>, f: F) -> T
    where
        F: FnOnce(&mut UploadSelection) -> T,
    {
        let mut entries = self.inner.lock().await;
        evict_idle(&mut entries, now);

        let entry = entries.entry(token.to_string()).or_insert_with(|| Entry {
            selection: UploadSelection::default(),
            touched_at: now,
        });
        entry.touched_at = now;
        f(&mut entry.selection)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
