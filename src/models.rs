//! Frontend Models
//!
//! Data exchanged with the HelpBridge API.

use helpbridge_core::needs::Urgency;
use helpbridge_core::User;
use serde::{Deserialize, Serialize};

/// Successful login or registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Need detail returned by `GET /needs/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedDetail {
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub urgency: Urgency,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub funding_raised: f64,
    #[serde(default)]
    pub volunteers_assigned: u32,
    #[serde(default)]
    pub contact: String,
}
