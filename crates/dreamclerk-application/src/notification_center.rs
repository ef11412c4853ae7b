//! Notification center: the dashboard bell.
//!
//! Writes go through the repository; every change is also published on a
//! broadcast channel so open dashboards can update without polling.

use std::sync::Arc;

use tokio::sync::broadcast;

use dreamclerk_core::error::{DreamclerkError, Result};
use dreamclerk_core::notification::{
    NotificationEvent, NotificationKind, NotificationRecord, NotificationRepository,
};

pub struct NotificationCenter {
    repository: Arc<dyn NotificationRepository>,
    events: broadcast::Sender<NotificationEvent>,
}

impl NotificationCenter {
    /// Creates a center whose change stream buffers `capacity` events per
    /// subscriber. Slow subscribers lose the oldest events.
    pub fn new(repository: Arc<dyn NotificationRepository>, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self { repository, events }
    }

    /// Subscribes to the change stream. Only events after this call are
    /// delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: NotificationEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    /// Stores a new unread notification and publishes it.
    pub async fn notify(
        &self,
        user_id: &str,
        message: &str,
        kind: NotificationKind,
        link: Option<String>,
    ) -> Result<NotificationRecord> {
        if message.trim().is_empty() {
            return Err(DreamclerkError::validation("Notification message cannot be empty."));
        }

        let notification = NotificationRecord::new(user_id, message.trim(), kind, link);
        self.repository.save(&notification).await?;
        tracing::info!(user_id, id = %notification.id, kind = %kind, "notification created");

        self.publish(NotificationEvent::Created {
            notification: notification.clone(),
        });
        Ok(notification)
    }

    /// A user's notifications, newest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<NotificationRecord>> {
        self.repository.list_by_user(user_id).await
    }

    pub async fn unread_count(&self, user_id: &str) -> Result<usize> {
        Ok(self
            .repository
            .list_by_user(user_id)
            .await?
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    /// Marks one notification read. Already-read notifications are returned
    /// unchanged and publish nothing.
    pub async fn mark_read(&self, id: &str) -> Result<NotificationRecord> {
        let mut notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DreamclerkError::not_found("notification", id))?;

        if notification.read {
            return Ok(notification);
        }

        notification.read = true;
        self.repository.save(&notification).await?;
        self.publish(NotificationEvent::Read {
            id: notification.id.clone(),
            user_id: notification.user_id.clone(),
        });
        Ok(notification)
    }

    /// Marks every unread notification of a user read and returns how many
    /// changed.
    ///
    /// If a write fails partway, the notifications already written are still
    /// announced in an `AllRead` event before the error is returned.
    pub async fn mark_all_read(&self, user_id: &str) -> Result<usize> {
        let mut count = 0;
        let mut failure = None;
        for mut notification in self.repository.list_by_user(user_id).await? {
            if notification.read {
                continue;
            }
            notification.read = true;
            if let Err(e) = self.repository.save(&notification).await {
                failure = Some(e);
                break;
            }
            count += 1;
        }

        if count > 0 {
            self.publish(NotificationEvent::AllRead {
                user_id: user_id.to_string(),
                count,
            });
        }

        match failure {
            Some(e) => {
                tracing::warn!(error = %e, user_id, count, "mark all read stopped partway");
                Err(e)
            }
            None => Ok(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dreamclerk_infrastructure::FileNotificationRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;
    use tokio::sync::broadcast::error::RecvError;

    /// File-backed repository that fails every save once its budget is spent.
    struct SaveBudgetRepository {
        inner: FileNotificationRepository,
        saves_left: AtomicUsize,
    }

    #[async_trait]
    impl NotificationRepository for SaveBudgetRepository {
        async fn save(&self, notification: &NotificationRecord) -> Result<()> {
            if self.saves_left.load(Ordering::SeqCst) == 0 {
                return Err(DreamclerkError::data_access("store unavailable"));
            }
            self.saves_left.fetch_sub(1, Ordering::SeqCst);
            self.inner.save(notification).await
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<NotificationRecord>> {
            self.inner.find_by_id(id).await
        }

        async fn list_by_user(&self, user_id: &str) -> Result<Vec<NotificationRecord>> {
            self.inner.list_by_user(user_id).await
        }
    }

    fn center(temp_dir: &TempDir) -> NotificationCenter {
        NotificationCenter::new(
            Arc::new(FileNotificationRepository::new(temp_dir.path())),
            16,
        )
    }

    #[tokio::test]
    async fn test_notify_publishes_created_event() {
        let temp_dir = TempDir::new().unwrap();
        let center = center(&temp_dir);
        let mut events = center.subscribe();

        let created = center
            .notify("u1", "Profile saved", NotificationKind::Success, None)
            .await
            .unwrap();

        match events.recv().await.unwrap() {
            NotificationEvent::Created { notification } => assert_eq!(notification, created),
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(center.list("u1").await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = center(&temp_dir)
            .notify("u1", "  ", NotificationKind::Info, None)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_mark_read_and_unread_count() {
        let temp_dir = TempDir::new().unwrap();
        let center = center(&temp_dir);
        let first = center.notify("u1", "one", NotificationKind::Info, None).await.unwrap();
        center.notify("u1", "two", NotificationKind::Warning, None).await.unwrap();
        assert_eq!(center.unread_count("u1").await.unwrap(), 2);

        let mut events = center.subscribe();
        let read = center.mark_read(&first.id).await.unwrap();
        assert!(read.read);
        assert_eq!(center.unread_count("u1").await.unwrap(), 1);
        assert_eq!(
            events.recv().await.unwrap(),
            NotificationEvent::Read {
                id: first.id.clone(),
                user_id: "u1".to_string()
            }
        );

        // Second call is a no-op
        center.mark_read(&first.id).await.unwrap();
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let err = center(&temp_dir).mark_read("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_mark_all_read_only_touches_one_user() {
        let temp_dir = TempDir::new().unwrap();
        let center = center(&temp_dir);
        for message in ["a", "b", "c"] {
            center.notify("u1", message, NotificationKind::Info, None).await.unwrap();
        }
        center.notify("u2", "other", NotificationKind::Info, None).await.unwrap();

        assert_eq!(center.mark_all_read("u1").await.unwrap(), 3);
        assert_eq!(center.unread_count("u1").await.unwrap(), 0);
        assert_eq!(center.unread_count("u2").await.unwrap(), 1);
        assert_eq!(center.mark_all_read("u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_loses_oldest_events() {
        let temp_dir = TempDir::new().unwrap();
        let center = NotificationCenter::new(
            Arc::new(FileNotificationRepository::new(temp_dir.path())),
            2,
        );
        let mut events = center.subscribe();

        for message in ["a", "b", "c", "d"] {
            center.notify("u1", message, NotificationKind::Info, None).await.unwrap();
        }

        assert_eq!(events.recv().await.unwrap_err(), RecvError::Lagged(2));
        for expected in ["c", "d"] {
            match events.recv().await.unwrap() {
                NotificationEvent::Created { notification } => {
                    assert_eq!(notification.message, expected)
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_mark_all_read_announces_partial_progress() {
        let temp_dir = TempDir::new().unwrap();
        let inner = FileNotificationRepository::new(temp_dir.path());
        for message in ["a", "b", "c"] {
            inner
                .save(&NotificationRecord::new("u1", message, NotificationKind::Info, None))
                .await
                .unwrap();
        }
        let center = NotificationCenter::new(
            Arc::new(SaveBudgetRepository {
                inner,
                saves_left: AtomicUsize::new(1),
            }),
            16,
        );
        let mut events = center.subscribe();

        let err = center.mark_all_read("u1").await.unwrap_err();
        assert!(matches!(err, DreamclerkError::DataAccess(_)));
        assert_eq!(
            events.try_recv().unwrap(),
            NotificationEvent::AllRead {
                user_id: "u1".to_string(),
                count: 1
            }
        );
        assert_eq!(center.unread_count("u1").await.unwrap(), 2);
    }
}
