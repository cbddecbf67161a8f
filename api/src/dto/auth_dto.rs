use serde::{Deserialize, Serialize};

use chirpy_core::domain::value_objects::LoginResult;

use super::user_dto::UserResponse;

/// Email and password, used for registration, login and credential updates
///
/// Absent fields deserialize as empty so the service can report them as
/// missing rather than failing at the JSON layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            user: result.user.into(),
            token: result.access_token,
            refresh_token: result.refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
