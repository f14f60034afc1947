//! Authentication Handshake — exchange a platform identity token for a
//! backend session credential.
//!
//! One instance per trigger, strictly sequential: request the platform token,
//! then exchange it, then resolve. The whole run sits under a single timeout
//! so a provider that never calls back resolves as `TimedOut` instead of
//! holding the reply channel open forever. Exactly one terminal outcome per
//! run, never zero, never two. No retries; a failed handshake takes a fresh
//! user trigger.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::auth::identity::{TokenProvider, TokenRequest};
use crate::auth::session::AuthSession;
use crate::backend::SessionExchange;
use crate::errors::AuthFailure;

/// Steps of one handshake, in the order they are entered. Tracked for
/// logging; the run itself is a straight-line async sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeStep {
    RequestingPlatformToken,
    ExchangingCredential,
}

/// Runs one handshake to a terminal state.
///
/// Failure mapping:
/// - provider error → [`AuthFailure::ProviderDenied`]
/// - provider success with no usable token → [`AuthFailure::NoTokenReturned`]
/// - backend rejection of the exchanged credential →
///   [`AuthFailure::ExchangeRejected`]
/// - `timeout` elapsed at any step → [`AuthFailure::TimedOut`]
pub async fn run_handshake(
    provider: &dyn TokenProvider,
    backend: &dyn SessionExchange,
    request: &TokenRequest,
    timeout: Duration,
) -> Result<AuthSession, AuthFailure> {
    let result = tokio::time::timeout(timeout, drive(provider, backend, request)).await;

    match result {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs(), "handshake timed out");
            Err(AuthFailure::TimedOut(timeout.as_secs()))
        }
    }
}

async fn drive(
    provider: &dyn TokenProvider,
    backend: &dyn SessionExchange,
    request: &TokenRequest,
) -> Result<AuthSession, AuthFailure> {
    debug!(step = ?HandshakeStep::RequestingPlatformToken, interactive = request.interactive);
    let token = provider
        .platform_token(request)
        .await
        .map_err(|denied| {
            warn!(%denied, "platform token request denied");
            AuthFailure::ProviderDenied(denied.0)
        })?
        .filter(|token| !token.is_empty())
        .ok_or(AuthFailure::NoTokenReturned)?;

    debug!(step = ?HandshakeStep::ExchangingCredential);
    let session = backend.exchange(&token).await.map_err(|error| {
        warn!(%error, "credential exchange rejected");
        AuthFailure::ExchangeRejected(error.to_string())
    })?;

    info!(uid = %session.user.uid, "handshake authenticated");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identity::{ProviderDenied, StaticTokenProvider};
    use crate::auth::session::SessionUser;
    use crate::backend::BackendError;
    use async_trait::async_trait;

    struct FakeExchange {
        reject: bool,
    }

    #[async_trait]
    impl SessionExchange for FakeExchange {
        async fn exchange(&self, platform_token: &str) -> Result<AuthSession, BackendError> {
            if self.reject {
                return Err(BackendError::Api {
                    status: 401,
                    message: "invalid credential".to_string(),
                });
            }
            Ok(AuthSession::new(
                SessionUser {
                    uid: "uid-1".to_string(),
                    email: "user@example.com".to_string(),
                    display_name: None,
                    photo_url: None,
                },
                format!("session-for-{platform_token}"),
            ))
        }
    }

    struct DenyingProvider;

    #[async_trait]
    impl TokenProvider for DenyingProvider {
        async fn platform_token(
            &self,
            _request: &TokenRequest,
        ) -> Result<Option<String>, ProviderDenied> {
            Err(ProviderDenied("The user did not approve access.".to_string()))
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl TokenProvider for HangingProvider {
        async fn platform_token(
            &self,
            _request: &TokenRequest,
        ) -> Result<Option<String>, ProviderDenied> {
            std::future::pending().await
        }
    }

    fn request() -> TokenRequest {
        TokenRequest::interactive(vec!["email".to_string()])
    }

    #[tokio::test]
    async fn test_happy_path_yields_session() {
        let provider = StaticTokenProvider::new(Some("platform-tok".to_string()));
        let backend = FakeExchange { reject: false };

        let session = run_handshake(&provider, &backend, &request(), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(session.user.uid, "uid-1");
        assert_eq!(session.id_token, "session-for-platform-tok");
    }

    #[tokio::test]
    async fn test_denied_provider_maps_to_provider_denied() {
        let backend = FakeExchange { reject: false };
        let result =
            run_handshake(&DenyingProvider, &backend, &request(), Duration::from_secs(5)).await;
        assert_eq!(
            result,
            Err(AuthFailure::ProviderDenied(
                "The user did not approve access.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_missing_token_without_error_is_no_token_returned() {
        // Provider reports no error but hands back nothing usable.
        let provider = StaticTokenProvider::new(None);
        let backend = FakeExchange { reject: false };
        let result = run_handshake(&provider, &backend, &request(), Duration::from_secs(5)).await;
        assert_eq!(result, Err(AuthFailure::NoTokenReturned));
    }

    #[tokio::test]
    async fn test_empty_token_without_error_is_no_token_returned() {
        let provider = StaticTokenProvider::new(Some(String::new()));
        let backend = FakeExchange { reject: false };
        let result = run_handshake(&provider, &backend, &request(), Duration::from_secs(5)).await;
        assert_eq!(result, Err(AuthFailure::NoTokenReturned));
    }

    #[tokio::test]
    async fn test_backend_rejection_maps_to_exchange_rejected() {
        let provider = StaticTokenProvider::new(Some("tok".to_string()));
        let backend = FakeExchange { reject: true };
        let result = run_handshake(&provider, &backend, &request(), Duration::from_secs(5)).await;
        match result {
            Err(AuthFailure::ExchangeRejected(message)) => {
                assert!(message.contains("401"));
            }
            other => panic!("expected ExchangeRejected, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_provider_resolves_as_timed_out() {
        let backend = FakeExchange { reject: false };
        let result =
            run_handshake(&HangingProvider, &backend, &request(), Duration::from_secs(30)).await;
        assert_eq!(result, Err(AuthFailure::TimedOut(30)));
    }
}
