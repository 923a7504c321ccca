use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    /// Run pending migrations (schema + bootstrap administrator) at startup.
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            auto_migrate: default_auto_migrate(),
        }
    }
}

/// Token signing settings. There is no built-in fallback key.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: None, token_ttl_hours: default_token_ttl_hours() }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_auto_migrate() -> bool { true }
fn default_token_ttl_hours() -> u64 { 24 }

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 366;

const SUPPORTED_SCHEMES: [&str; 4] = ["postgres://", "postgresql://", "mysql://", "sqlite:"];

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `CONFIG_PATH` (or `config.toml`) when present, otherwise start from
    /// defaults; then fill gaps from the environment and validate.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok());
        self.server.normalize()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Fill values left empty by the file from `lookup` (normally the process env).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.database.url.trim().is_empty() {
            if let Some(url) = lookup("DATABASE_URL") {
                self.database.url = url;
            }
        }
        let secret_missing = self
            .auth
            .jwt_secret
            .as_deref()
            .map_or(true, |s| s.trim().is_empty());
        if secret_missing {
            self.auth.jwt_secret = lookup("JWT_SECRET");
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !SUPPORTED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
            return Err(anyhow!("database.url must start with one of {:?}", SUPPORTED_SCHEMES));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<()> {
        match self.jwt_secret.as_deref() {
            Some(s) if !s.trim().is_empty() => {}
            _ => return Err(anyhow!("auth.jwt_secret is not set; set it in config.toml or JWT_SECRET")),
        }
        if self.token_ttl_hours == 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(anyhow!("auth.token_ttl_hours must be within 1..={}", MAX_TOKEN_TTL_HOURS));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://u:p@localhost/vehicles"
            max_connections = 5
            min_connections = 1

            [auth]
            jwt_secret = "k"
            token_ttl_hours = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert!(cfg.database.auto_migrate);
        assert_eq!(cfg.auth.jwt_secret.as_deref(), Some("k"));
        assert_eq!(cfg.auth.token_ttl_hours, 2);
    }

    #[test]
    fn env_fills_missing_values_only() {
        let mut cfg = parse("[database]\nurl = \"sqlite::memory:\"\n").unwrap();
        cfg.apply_overrides(env(&[
            ("DATABASE_URL", "postgres://ignored"),
            ("JWT_SECRET", "from-env"),
            ("SERVER_PORT", "8181"),
        ]));
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.auth.jwt_secret.as_deref(), Some("from-env"));
        assert_eq!(cfg.server.port, 8181);
    }

    #[test]
    fn missing_secret_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        assert!(cfg.database.validate().is_ok());
        assert!(cfg.auth.validate().is_err());

        cfg.auth.jwt_secret = Some("   ".into());
        assert!(cfg.auth.validate().is_err());
    }

    #[test]
    fn token_ttl_is_bounded() {
        let mut auth = AuthConfig { jwt_secret: Some("k".into()), ..Default::default() };
        assert!(auth.validate().is_ok());
        auth.token_ttl_hours = MAX_TOKEN_TTL_HOURS;
        assert!(auth.validate().is_ok());
        auth.token_ttl_hours = MAX_TOKEN_TTL_HOURS + 1;
        assert!(auth.validate().is_err());
        auth.token_ttl_hours = 2_000_000_000_000;
        assert!(auth.validate().is_err());
        auth.token_ttl_hours = 0;
        assert!(auth.validate().is_err());
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let mut db = DatabaseConfig::default();
        db.url = "redis://localhost".into();
        assert!(db.validate().is_err());
        db.url = "mysql://root@localhost/app".into();
        assert!(db.validate().is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let mut db = DatabaseConfig { url: "postgres://x".into(), ..Default::default() };
        db.min_connections = 5;
        db.max_connections = 2;
        assert!(db.validate().is_err());
    }

    #[test]
    fn zero_workers_normalize_to_four() {
        let mut s = ServerConfig { worker_threads: Some(0), ..Default::default() };
        s.normalize().unwrap();
        assert_eq!(s.worker_threads, Some(4));
    }
}
