//! Popup UI reflection.
//!
//! The popup never owns auth state. It holds a watch receiver onto the
//! session snapshot and renders one of two mutually exclusive views; it
//! originates nothing beyond sign-in/sign-out requests to the worker, and it
//! reports each request's outcome as a single status line.

use tokio::sync::watch;
use tracing::debug;

use crate::auth::session::AuthSession;
use crate::auth::worker::WorkerHandle;
use crate::messages::Message;

/// What the popup shows. Exactly one of the two at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupView {
    /// Sign-in control only.
    SignedOut,
    /// Session identity plus sign-out control.
    SignedIn {
        email: String,
        photo_url: Option<String>,
    },
}

/// One line of user-visible status under the controls.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Pure projection of a session snapshot onto the popup view.
pub fn render_view(session: Option<&AuthSession>) -> PopupView {
    match session {
        Some(session) => PopupView::SignedIn {
            email: session.user.email.clone(),
            photo_url: session.user.photo_url.clone(),
        },
        None => PopupView::SignedOut,
    }
}

/// The popup context: worker handle in, rendered view out.
pub struct Popup {
    worker: WorkerHandle,
    sessions: watch::Receiver<Option<AuthSession>>,
    view: PopupView,
}

impl Popup {
    /// Subscribing renders the initial state immediately.
    pub fn new(worker: WorkerHandle, sessions: watch::Receiver<Option<AuthSession>>) -> Self {
        let view = render_view(sessions.borrow().as_ref());
        Popup {
            worker,
            sessions,
            view,
        }
    }

    pub fn view(&self) -> &PopupView {
        &self.view
    }

    /// Requests the sign-in handshake and reports its outcome once.
    pub async fn sign_in(&mut self) -> StatusMessage {
        let status = match self.worker.send(Message::InitializeGoogleAuth).await {
            Some(response) if response.success => StatusMessage::info("Signed in successfully."),
            Some(response) => StatusMessage::error(format!(
                "Sign-in failed: {}",
                response.error.unwrap_or_else(|| "unknown error".to_string())
            )),
            None => StatusMessage::error("Sign-in failed: no response from the service worker."),
        };
        self.refresh();
        status
    }

    /// Requests sign-out and reports its outcome once.
    pub async fn sign_out(&mut self) -> StatusMessage {
        let status = match self.worker.send(Message::SignOut).await {
            Some(response) if response.success => StatusMessage::info("Signed out."),
            _ => StatusMessage::error("Sign-out failed."),
        };
        self.refresh();
        status
    }

    /// Waits for the next session change and re-renders. Returns the new
    /// view, or `None` once the store side is gone.
    pub async fn changed(&mut self) -> Option<&PopupView> {
        self.sessions.changed().await.ok()?;
        self.refresh();
        Some(&self.view)
    }

    /// Re-reads the current snapshot. The popup redraws from the snapshot
    /// alone; it never edits the session.
    pub fn refresh(&mut self) {
        let view = render_view(self.sessions.borrow().as_ref());
        if view != self.view {
            debug!(?view, "popup view changed");
            self.view = view;
        }
    }
}
