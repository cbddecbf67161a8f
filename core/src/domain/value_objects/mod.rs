//! Value objects representing immutable domain concepts.

pub mod auth_response;

// Re-export commonly used types
pub use auth_response::{
    LoginResult, WebhookEvent, WebhookEventData, WebhookOutcome, USER_UPGRADED_EVENT,
};
