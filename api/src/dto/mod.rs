//! Request and response bodies

pub mod auth_dto;
pub mod chirp_dto;
pub mod user_dto;

pub use auth_dto::{CredentialsRequest, LoginResponse, TokenResponse};
pub use chirp_dto::{ChirpResponse, CreateChirpRequest, ListChirpsQuery};
pub use chirpy_shared::errors::ErrorResponse;
pub use user_dto::UserResponse;
