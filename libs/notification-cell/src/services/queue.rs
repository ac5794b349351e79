use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Notification, Severity};

/// How long an entry stays visible unless dismissed first.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Process-wide ephemeral notification list, newest first.
///
/// Every `notify` schedules an expiry task for exactly that entry;
/// `dismiss` cancels the matching task. The queue starts empty and has no
/// capacity bound other than expiry.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<QueueInner>,
}

struct QueueInner {
    entries: RwLock<Vec<Notification>>,
    timers: Mutex<HashMap<Uuid, JoinHandle<()>>>,
    changes: watch::Sender<Vec<Notification>>,
}

impl QueueInner {
    async fn remove(&self, id: Uuid) -> bool {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|n| n.id != id);
        entries.len() != before
    }

    async fn publish(&self) {
        let entries = self.entries.read().await;
        self.changes.send_replace(entries.clone());
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(Vec::new());

        Self {
            inner: Arc::new(QueueInner {
                entries: RwLock::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                changes,
            }),
        }
    }

    /// Prepend a notification and schedule its auto-removal.
    pub async fn notify(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        let notification = Notification::new(message, severity);
        let id = notification.id;
        debug!("Queueing {} notification {}", notification.severity, id);

        {
            let mut entries = self.inner.entries.write().await;
            entries.insert(0, notification);
        }
        self.inner.publish().await;

        let inner = Arc::clone(&self.inner);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS_AFTER).await;
            inner.timers.lock().await.remove(&id);
            if inner.remove(id).await {
                debug!("Notification {} expired", id);
                inner.publish().await;
            }
        });
        self.inner.timers.lock().await.insert(id, timer);

        id
    }

    /// Remove an entry immediately and cancel its expiry timer. No-op when
    /// the id is already gone.
    pub async fn dismiss(&self, id: Uuid) {
        if let Some(timer) = self.inner.timers.lock().await.remove(&id) {
            timer.abort();
        }

        if self.inner.remove(id).await {
            debug!("Notification {} dismissed", id);
            self.inner.publish().await;
        }
    }

    /// Current ordered list, newest first.
    pub async fn snapshot(&self) -> Vec<Notification> {
        self.inner.entries.read().await.clone()
    }

    /// Observe every change to the rendered list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.changes.subscribe()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}
