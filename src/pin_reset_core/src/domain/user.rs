use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{phone_number::PhoneNumber, username::Username};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum UserRoleError {
    #[error("Unknown user role: {0}")]
    UnknownRole(String),
}

/// Account classification. Only customers may request a PIN reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Staff,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Staff => "staff",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, UserRole::Customer)
    }
}

impl FromStr for UserRole {
    type Err = UserRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserRole::Customer),
            "staff" => Ok(UserRole::Staff),
            "admin" => Ok(UserRole::Admin),
            other => Err(UserRoleError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory entry for an account. Read-only from this service's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    id: UserId,
    username: Username,
    phone_number: PhoneNumber,
    role: UserRole,
    first_name: String,
    last_name: String,
}

impl UserRecord {
    pub fn new(
        id: UserId,
        username: Username,
        phone_number: PhoneNumber,
        role: UserRole,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id,
            username,
            phone_number,
            role,
            first_name,
            last_name,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}
