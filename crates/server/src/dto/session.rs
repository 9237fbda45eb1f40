use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
