//! Results handed back to the HTTP layer by the auth service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Webhook event name that upgrades an account
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Successful login: the user plus a fresh token pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    /// The authenticated user
    pub user: User,

    /// Signed access token, verifiable without a store round-trip
    pub access_token: String,

    /// Opaque refresh token, already persisted
    pub refresh_token: String,
}

/// Payment provider webhook payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `user.upgraded`
    pub event: String,

    /// Event data
    pub data: WebhookEventData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEventData {
    /// The account the event refers to
    pub user_id: Uuid,
}

impl WebhookEvent {
    pub fn new(event: impl Into<String>, user_id: Uuid) -> Self {
        Self {
            event: event.into(),
            data: WebhookEventData { user_id },
        }
    }
}

/// What a webhook call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The user was upgraded
    Upgraded,
    /// The event is not one we act on
    Ignored,
}
