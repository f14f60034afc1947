//! Core logic of the CV form-filler extension: field detection and autofill
//! for the content-script context, and the Google-token-for-session-credential
//! handshake run by the service-worker context.
//!
//! The three extension contexts (popup, content script, service worker) are
//! modeled as independent single-threaded tasks that communicate only through
//! async message passing. Shared state is limited to the read-only field
//! taxonomy and the session snapshot published over a watch channel.

pub mod auth;
pub mod backend;
pub mod config;
pub mod errors;
pub mod fill;
pub mod messages;
pub mod popup;

pub use auth::session::{AuthSession, SessionStore, SessionUser};
pub use auth::worker::{spawn_worker, WorkerHandle};
pub use errors::{AuthFailure, FillError};
pub use fill::taxonomy::FieldKind;
pub use messages::{AuthResponse, Message};
