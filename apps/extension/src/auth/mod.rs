//! Authentication: the token-for-credential handshake run by the service
//! worker, the session snapshot it publishes, and the provider seam.

pub mod handshake;
pub mod identity;
pub mod session;
pub mod worker;
