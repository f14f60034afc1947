//! Identity Token Provider seam.
//!
//! The platform component that authenticates the user and hands out a
//! short-lived token lives outside this crate. Everything here is the
//! request shape, the trait boundary, and a static provider for the dev
//! harness.

use async_trait::async_trait;
use thiserror::Error;

/// Token request passed to the platform provider.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    /// Whether the provider may prompt the user.
    pub interactive: bool,
    pub scopes: Vec<String>,
}

impl TokenRequest {
    pub fn interactive(scopes: Vec<String>) -> Self {
        TokenRequest {
            interactive: true,
            scopes,
        }
    }
}

/// The provider refused to issue a token (user cancelled, consent denied,
/// or a provider-side error).
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct ProviderDenied(pub String);

/// Source of platform identity tokens.
///
/// `Ok(None)` is the awkward-but-real case the protocol distinguishes: the
/// provider reported no error yet returned no usable token. Callers must not
/// treat it as success.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn platform_token(&self, request: &TokenRequest)
        -> Result<Option<String>, ProviderDenied>;
}

/// Provider backed by a pre-issued token, for the dev harness and tests.
/// `None` reproduces the empty-token provider response.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        StaticTokenProvider { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn platform_token(
        &self,
        _request: &TokenRequest,
    ) -> Result<Option<String>, ProviderDenied> {
        Ok(self.token.clone().filter(|t| !t.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_configured_token() {
        let provider = StaticTokenProvider::new(Some("tok".to_string()));
        let request = TokenRequest::interactive(vec![]);
        assert_eq!(
            provider.platform_token(&request).await.unwrap(),
            Some("tok".to_string())
        );
    }

    #[tokio::test]
    async fn test_static_provider_treats_empty_token_as_absent() {
        let provider = StaticTokenProvider::new(Some(String::new()));
        let request = TokenRequest::interactive(vec![]);
        assert_eq!(provider.platform_token(&request).await.unwrap(), None);
    }
}
