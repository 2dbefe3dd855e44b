use anyhow::{Context, Result};
use contracts::enums::role::Role;
use contracts::system::access::RoutePolicy;

use crate::shared::config::Config;
use crate::system::auth::jwt::JwtKeys;
use crate::system::auth::service::AppState;
use crate::system::users::directory::UserDirectory;

/// Build the shared state from configuration
pub fn build_state(config: &Config) -> Result<AppState> {
    // The frontend embeds the same table; refuse to serve a build whose policy is broken
    let policy = RoutePolicy::builtin().context("Built-in route policy is invalid")?;
    tracing::info!("Route policy: {} routes", policy.routes().len());

    let users = UserDirectory::from_config(&config.users).context("Invalid [[users]] section")?;
    if users.is_empty() {
        tracing::warn!("User directory is empty; nobody will be able to log in");
    }
    for role in Role::all() {
        tracing::info!("  {:<10} {} user(s)", role.code(), users.count_by_role(role));
    }

    Ok(AppState {
        users,
        jwt: JwtKeys::from_config(&config.auth),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    #[test]
    fn test_default_config_builds_state() {
        let config = parse_config("[auth]\njwt_secret = \"s\"\n\n[[users]]\nid = \"1\"\nusername = \"admin\"\nname = \"Admin\"\nrole = \"admin\"\npassword = \"admin\"\n").unwrap();
        let state = build_state(&config).unwrap();
        assert!(state.users.verify_credentials("admin", "admin").is_some());
    }

    #[test]
    fn test_duplicate_users_fail_startup() {
        let config = parse_config(
            r#"
[[users]]
id = "1"
username = "admin"
name = "Admin"
role = "admin"
password = "a"

[[users]]
id = "2"
username = "admin"
name = "Other"
role = "manager"
password = "b"
"#,
        )
        .unwrap();
        assert!(build_state(&config).is_err());
    }
}
