//! Session route handlers
//!
//! - Login with email and password
//! - Access token refresh from a refresh token
//! - Refresh token revocation

pub mod login;
pub mod refresh;
pub mod revoke;

pub use login::login;
pub use refresh::refresh;
pub use revoke::revoke;
