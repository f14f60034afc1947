//! Service-worker message loop.
//!
//! Owns the provider, the backend exchange, and the session store. Each
//! incoming envelope is answered at most once: auth triggers get exactly one
//! structured reply, everything else is dropped and the reply channel is
//! released without a payload.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::auth::handshake::run_handshake;
use crate::auth::identity::{TokenProvider, TokenRequest};
use crate::auth::session::SessionStore;
use crate::backend::SessionExchange;
use crate::messages::{AuthResponse, Message};

const CHANNEL_CAPACITY: usize = 16;

struct Envelope {
    message: Message,
    reply: oneshot::Sender<AuthResponse>,
}

/// Handle other contexts use to reach the service worker.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WorkerHandle {
    /// Sends a message and waits for the worker's reply.
    ///
    /// `None` means the worker sent no response: either the action was
    /// unrecognized (dropped silently, by protocol) or the worker is gone.
    pub async fn send(&self, message: Message) -> Option<AuthResponse> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let envelope = Envelope {
            message,
            reply: reply_tx,
        };
        self.tx.send(envelope).await.ok()?;
        reply_rx.await.ok()
    }
}

/// Spawns the worker task. Returns the handle used to message it.
pub fn spawn_worker(
    provider: Arc<dyn TokenProvider>,
    backend: Arc<dyn SessionExchange>,
    sessions: Arc<SessionStore>,
    token_request: TokenRequest,
    handshake_timeout: Duration,
) -> (WorkerHandle, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<Envelope>(CHANNEL_CAPACITY);

    let task = tokio::spawn(async move {
        while let Some(Envelope { message, reply }) = rx.recv().await {
            match message {
                Message::InitializeGoogleAuth => {
                    info!("sign-in handshake triggered");
                    let result = run_handshake(
                        provider.as_ref(),
                        backend.as_ref(),
                        &token_request,
                        handshake_timeout,
                    )
                    .await;

                    if let Ok(session) = &result {
                        sessions.publish(Some(session.clone()));
                    }

                    // Receiver may have gone away; the handshake outcome
                    // stands either way.
                    let _ = reply.send(AuthResponse::from_handshake(&result));
                }
                Message::SignOut => {
                    info!("sign-out requested");
                    sessions.publish(None);
                    let _ = reply.send(AuthResponse::signed_out());
                }
                other => {
                    // fillField belongs to the content script; anything else
                    // is unknown. Dropping `reply` closes the channel with no
                    // payload.
                    debug!(?other, "dropping unrecognized worker message");
                }
            }
        }
    });

    (WorkerHandle { tx }, task)
}
