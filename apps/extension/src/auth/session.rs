//! Signed-in session state and its change subscription.
//!
//! The service worker is the only writer. Popup and page contexts hold a
//! watch receiver, never the session itself: they re-read the snapshot on
//! every notified change, starting with the value current at subscription
//! time. Sign-out publishes `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Identity attributes of the signed-in user, as returned by the session
/// backend. Field names match the wire protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    #[serde(
        rename = "displayName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// A completed sign-in: who the user is plus the short-lived bearer
/// credential for backend calls.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: SessionUser,
    pub id_token: String,
    pub issued_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(user: SessionUser, id_token: String) -> Self {
        AuthSession {
            user,
            id_token,
            issued_at: Utc::now(),
        }
    }
}

/// Single-writer store for the current session, with watch-based fanout.
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<Option<AuthSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        SessionStore { tx }
    }

    /// Publishes a new snapshot. `None` means signed out.
    pub fn publish(&self, session: Option<AuthSession>) {
        // send_replace, not send: the store must accept a publish even when
        // no subscriber is currently listening.
        self.tx.send_replace(session);
    }

    /// Subscribes to session changes. The receiver sees the current snapshot
    /// immediately via `borrow` and is notified of every later publish.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthSession>> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.tx.borrow().clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            uid: "uid-1".to_string(),
            email: "user@example.com".to_string(),
            display_name: Some("User".to_string()),
            photo_url: None,
        }
    }

    #[test]
    fn test_store_starts_signed_out() {
        let store = SessionStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let store = SessionStore::new();
        store.publish(Some(AuthSession::new(sample_user(), "tok".to_string())));
        assert_eq!(store.current().unwrap().id_token, "tok");
    }

    #[tokio::test]
    async fn test_subscriber_sees_initial_value_and_changes() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        assert!(rx.borrow().is_none());

        store.publish(Some(AuthSession::new(sample_user(), "tok".to_string())));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().user.uid, "uid-1");

        store.publish(None);
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[test]
    fn test_session_user_wire_field_names() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "uid": "uid-1",
                "email": "user@example.com",
                "displayName": "User"
            })
        );
    }
}
