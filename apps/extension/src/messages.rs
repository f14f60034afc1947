//! Cross-context message protocol.
//!
//! Exactly the wire shapes the extension contexts exchange: a tagged action
//! message (`{"action": "..."}`) and the one-shot auth reply. Unknown actions
//! deserialize into [`Message::Unknown`] so receivers can drop them silently
//! instead of failing the whole channel.

use serde::{Deserialize, Serialize};

use crate::auth::session::{AuthSession, SessionUser};
use crate::errors::AuthFailure;

/// An action message sent between extension contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Message {
    /// Popup asks the service worker to run the sign-in handshake.
    #[serde(rename = "initializeGoogleAuth")]
    InitializeGoogleAuth,

    /// Context-menu click asks the content script to fill the focused field.
    /// Fire-and-forget: no response payload is expected.
    #[serde(rename = "fillField")]
    FillField,

    /// Popup asks the service worker to clear the current session.
    #[serde(rename = "signOut")]
    SignOut,

    /// Any action this build does not recognize. Dropped without a response.
    #[serde(other)]
    Unknown,
}

/// Reply to an `initializeGoogleAuth` (or `signOut`) trigger.
///
/// Matches the extension protocol:
/// `{success: true, token, user}` or `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    pub fn from_handshake(result: &Result<AuthSession, AuthFailure>) -> Self {
        match result {
            Ok(session) => AuthResponse {
                success: true,
                token: Some(session.id_token.clone()),
                user: Some(session.user.clone()),
                error: None,
            },
            Err(failure) => AuthResponse {
                success: false,
                token: None,
                user: None,
                error: Some(failure.to_string()),
            },
        }
    }

    /// Reply to a completed sign-out: success with no session attached.
    pub fn signed_out() -> Self {
        AuthResponse {
            success: true,
            token: None,
            user: None,
            error: None,
        }
    }
}
