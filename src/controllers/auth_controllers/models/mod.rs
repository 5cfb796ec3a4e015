use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub user_id: String,
    pub username: String,
}
