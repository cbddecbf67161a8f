//! Business services containing domain logic and use cases.

pub mod auth;
pub mod chirp;
pub mod credentials;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, Authenticator};
pub use chirp::ChirpService;
pub use credentials::{get_api_key, get_bearer_token, validate_api_key};
pub use password::{check_password_hash, hash_password, PasswordHasher};
pub use token::{
    issue_access_token, make_refresh_token, verify_access_token, TokenService,
    TokenServiceConfig,
};
