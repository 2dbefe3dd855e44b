use contracts::enums::role::Role;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Generated at startup when absent; tokens then do not survive a restart
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_lifetime_hours")]
    pub token_lifetime_hours: i64,
}

/// Account of the user directory.
///
/// Exactly one of `password_hash` (argon2 PHC string) and `password`
/// (plain text, development only) must be set.
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub password_hash: Option<String>,
    pub password: Option<String>,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_token_lifetime_hours() -> i64 {
    24
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_lifetime_hours: default_token_lifetime_hours(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[auth]
token_lifetime_hours = 24

[[users]]
id = "u-admin"
username = "admin"
name = "Garage Admin"
role = "admin"
password = "admin"

[[users]]
id = "u-manager"
username = "manager"
name = "Service Manager"
role = "manager"
password = "manager"

[[users]]
id = "u-tech"
username = "tech"
name = "Mike Tech"
role = "technician"
password = "tech"

[[users]]
id = "u-customer"
username = "customer"
name = "John Smith"
role = "user"
password = "customer"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(config_path) = config_path_next_to_exe() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.token_lifetime_hours <= 0 {
        anyhow::bail!("auth.token_lifetime_hours must be positive");
    }
    Ok(config)
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.token_lifetime_hours, 24);
        assert!(config.auth.jwt_secret.is_none());
        assert_eq!(config.users.len(), 4);
        let roles: Vec<Role> = config.users.iter().map(|u| u.role).collect();
        assert_eq!(roles, Role::all());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.static_dir, "dist");
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = parse_config(
            r#"
[[users]]
id = "1"
username = "boss"
name = "Boss"
role = "owner"
password = "x"
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_token_lifetime_must_be_positive() {
        assert!(parse_config("[auth]\ntoken_lifetime_hours = 0").is_err());
    }
}
