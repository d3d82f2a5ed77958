use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::http::response::FieldError;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    )
    .expect("email regex is valid");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A user reference sent alongside an item update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl Validate for User {}

/// Registration payload. Carries the password; never echoed back.
#[derive(Debug, Clone, Deserialize)]
pub struct UserIn {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl Validate for UserIn {
    fn validate(&self) -> Vec<FieldError> {
        if is_valid_email(&self.email) {
            Vec::new()
        } else {
            vec![FieldError::new(
                ["email"],
                "value is not a valid email address",
                "value_error",
            )]
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOut {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<UserIn> for UserOut {
    fn from(user: UserIn) -> Self {
        Self {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }
    }
}
