use serde::Deserialize;

use crate::domain::user::UserRole;
use crate::infrastructure::auth::JwtConfig;
use crate::infrastructure::user::SeedUser;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub jwt: JwtSettings,
    /// Users registered at startup
    pub users: Vec<SeedUserConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// `jwt.*` keys
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct JwtSettings {
    pub secret: String,
    /// Token lifetime in seconds
    pub expiration: u64,
    pub issuer: String,
}

#[derive(Clone, Deserialize)]
pub struct SeedUserConfig {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration: 3600,
            issuer: "auth-token-service".to_string(),
        }
    }
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[hidden]")
            .field("expiration", &self.expiration)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl std::fmt::Debug for SeedUserConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUserConfig")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl JwtSettings {
    pub fn to_jwt_config(&self) -> JwtConfig {
        JwtConfig::new(self.secret.clone(), self.expiration, self.issuer.clone())
    }
}

impl From<&SeedUserConfig> for SeedUser {
    fn from(seed: &SeedUserConfig) -> Self {
        Self {
            username: seed.username.clone(),
            password: seed.password.clone(),
            role: seed.role,
            enabled: seed.enabled,
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `APP__*` environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(source: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.jwt.expiration, 3600);
        assert_eq!(config.jwt.issuer, "auth-token-service");
        assert!(config.jwt.secret.is_empty());
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_full_document() {
        let config = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [logging]
            level = "debug"
            format = "json"

            [jwt]
            secret = "s3cr3t"
            expiration = 600
            issuer = "proselyte"

            [[users]]
            username = "alice"
            password = "secret123"
            role = "ADMIN"

            [[users]]
            username = "bob"
            password = "secret123"
            enabled = false
            "#,
        );

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, LogFormat::Json);

        let jwt = config.jwt.to_jwt_config();
        assert_eq!(jwt.secret, "s3cr3t");
        assert_eq!(jwt.expiration_seconds, 600);
        assert_eq!(jwt.issuer, "proselyte");

        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].role, UserRole::Admin);
        assert!(config.users[0].enabled);
        assert_eq!(config.users[1].role, UserRole::User);
        assert!(!config.users[1].enabled);

        let seed = SeedUser::from(&config.users[1]);
        assert_eq!(seed.username, "bob");
        assert_eq!(seed.password, "secret123");
        assert!(!seed.enabled);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = from_toml(
            r#"
            [jwt]
            secret = "do-not-print"

            [[users]]
            username = "alice"
            password = "also-hidden"
            "#,
        );

        let debug = format!("{:?}", config);
        assert!(!debug.contains("do-not-print"));
        assert!(!debug.contains("also-hidden"));
    }
}
