use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};

use crate::{config::AppConfig, error::AppError, state::AppState};

/// Extractor guarding the admin routes. Runs before the handler body on every
/// request: resolves the caller IP, applies the allowlist, then the static
/// bearer token if one is configured. When neither is configured the request
/// passes through untouched (fail-open; see `AppConfig::admin_token`).
#[derive(Debug, Clone)]
pub struct AdminCaller {
    pub ip: String,
}

/// Proxy headers take priority: first comma segment of `x-forwarded-for`,
/// then `x-real-ip`, then the peer address, then "unknown". Blank header
/// values fall through.
pub fn resolve_caller_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> String {
    if let Some(fwd) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = fwd.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }
    if let Some(real) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real = real.trim();
        if !real.is_empty() {
            return real.to_string();
        }
    }
    if let Some(peer) = peer {
        return peer.to_string();
    }
    "unknown".to_string()
}

pub fn check_access(
    config: &AppConfig,
    ip: &str,
    authorization: Option<&str>,
) -> Result<(), AppError> {
    if !config.admin_ips.is_empty() && !config.admin_ips.iter().any(|allowed| allowed == ip) {
        return Err(AppError::Forbidden { ip: ip.to_string() });
    }

    if let Some(token) = config.admin_token.as_deref() {
        let expected = format!("Bearer {token}");
        if authorization != Some(expected.as_str()) {
            return Err(AppError::Unauthorized);
        }
    }

    Ok(())
}

impl FromRequestParts<AppState> for AdminCaller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ci| ci.0.ip());
        let ip = resolve_caller_ip(&parts.headers, peer);

        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        check_access(&state.config, &ip, authorization)?;

        Ok(AdminCaller { ip })
    }
}
