//! Broker credential signing and forum session verification.

pub mod claims;
pub mod issuer;
pub mod session;

pub use claims::TokenClaims;
pub use issuer::TokenIssuer;
pub use session::{SessionClaims, SessionVerifier};
