use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chirpy_core::domain::entities::User;

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_shape() {
        let user = User::new("a@b.com".to_string(), "secret-hash".to_string());
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["isChirpyRed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(!json.to_string().contains("secret-hash"));
    }
}
