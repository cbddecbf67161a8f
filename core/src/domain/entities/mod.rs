//! Domain entities representing core business objects.

pub mod chirp;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use chirp::{Chirp, SortDirection, MAX_CHIRP_LENGTH};
pub use token::{
    Claims, RefreshToken,
    DEFAULT_ACCESS_TOKEN_TTL_SECONDS, REFRESH_TOKEN_BYTES, REFRESH_TOKEN_EXPIRY_DAYS,
    TOKEN_ISSUER,
};
pub use user::User;
