use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Allowed caller IPs for the admin endpoint. Empty = no IP restriction.
    pub admin_ips: Vec<String>,
    /// Static bearer token for the admin endpoint. `None` when unset or blank,
    /// in which case the token check is skipped entirely. Leaving both this and
    /// `admin_ips` empty leaves the admin endpoint fully open; locking it down
    /// is a deployment responsibility, not a code default.
    pub admin_token: Option<String>,
    /// Display-only owner contact number, served on the public contact route.
    pub owner_phone: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let admin_ips = parse_admin_ips(&env::var("ADMIN_IPS").unwrap_or_default());
        let admin_token = env::var("ADMIN_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let owner_phone = env::var("OWNER_PHONE").unwrap_or_else(|_| "7869072016".to_string());
        Ok(Self {
            database_url,
            host,
            port,
            admin_ips,
            admin_token,
            owner_phone,
        })
    }
}

/// Comma-separated list; entries are trimmed and blanks dropped.
pub fn parse_admin_ips(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
