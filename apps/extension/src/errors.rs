use thiserror::Error;

/// Terminal failure of an authentication handshake.
///
/// Each variant maps to a distinct point in the token-then-exchange sequence,
/// so the popup can tell a user cancellation apart from a backend rejection.
/// A failed handshake is never retried; it takes a fresh user trigger.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthFailure {
    #[error("Identity provider denied the token request: {0}")]
    ProviderDenied(String),

    #[error("Identity provider returned no usable token")]
    NoTokenReturned,

    #[error("Session backend rejected the exchanged credential: {0}")]
    ExchangeRejected(String),

    #[error("Handshake did not complete within {0}s")]
    TimedOut(u64),
}

/// Failure while mutating a form field.
///
/// Swallowed at the content-script boundary: a fill that goes wrong must
/// never surface an error into the host page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FillError {
    #[error("Target element is no longer attached to the document")]
    StaleElement,
}
