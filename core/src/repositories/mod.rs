//! Repository interfaces for the persistence collaborator.
//!
//! The core only describes capabilities here; concrete stores live in the
//! infrastructure crate.

pub mod chirp;
pub mod token;
pub mod user;

pub use chirp::ChirpRepository;
pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use chirp::MockChirpRepository;
#[cfg(test)]
pub use token::MockTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
