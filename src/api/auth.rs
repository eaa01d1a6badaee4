//! Authentication and Registration
//!
//! Login and sign-up calls against the HelpBridge API.

use helpbridge_core::registration::RegistrationPayload;

use super::send_json;
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{AuthSession, LoginRequest};

pub async fn login(config: &AppConfig, email: &str, password: &str) -> ApiResult<AuthSession> {
    let request = reqwest::Client::new()
        .post(config.endpoint("auth/login"))
        .json(&LoginRequest { email, password });
    let session: AuthSession = send_json(request).await?;
    log::info!("[Auth] signed in as {} ({})", session.user.email, session.user.role);
    Ok(session)
}

pub async fn register(config: &AppConfig, payload: &RegistrationPayload) -> ApiResult<AuthSession> {
    let request = reqwest::Client::new()
        .post(config.endpoint("auth/register"))
        .json(payload);
    let session: AuthSession = send_json(request).await?;
    log::info!("[Auth] registered {} as {}", session.user.email, session.user.role);
    Ok(session)
}
