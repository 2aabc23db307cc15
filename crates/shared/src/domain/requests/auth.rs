use crate::middleware::Validated;
use crate::validation::{Schema, schemas};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "Ada")]
    pub name: String,
}

impl Validated for RegisterRequest {
    fn schema() -> &'static Schema {
        &schemas::REGISTER
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validated for LoginRequest {
    fn schema() -> &'static Schema {
        &schemas::LOGIN
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Validated for UpdateProfileRequest {
    fn schema() -> &'static Schema {
        &schemas::UPDATE_PROFILE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl Validated for ChangePasswordRequest {
    fn schema() -> &'static Schema {
        &schemas::CHANGE_PASSWORD
    }
}
