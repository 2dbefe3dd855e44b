//! In-memory user directory loaded from `config.toml`.

use anyhow::{bail, Context, Result};
use contracts::enums::role::Role;
use contracts::system::auth::UserInfo;
use rand::Rng;
use std::collections::HashMap;

use crate::shared::config::UserConfig;
use crate::system::auth::password;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
}

impl UserRecord {
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug)]
pub struct UserDirectory {
    by_username: HashMap<String, UserRecord>,
    username_by_id: HashMap<String, String>,
    /// Hash checked for unknown usernames so they cost as much as known ones
    decoy_hash: String,
}

impl UserDirectory {
    /// Build the directory, hashing development passwords given in plain text
    pub fn from_config(users: &[UserConfig]) -> Result<Self> {
        let mut directory = Self {
            by_username: HashMap::new(),
            username_by_id: HashMap::new(),
            decoy_hash: decoy_hash()?,
        };

        for user in users {
            let username = normalize_username(&user.username);
            if username.is_empty() || user.id.trim().is_empty() || user.name.trim().is_empty() {
                bail!("user '{}': id, username and name must not be empty", user.username);
            }

            let password_hash = match (&user.password_hash, &user.password) {
                (Some(hash), None) => {
                    password::validate_hash(hash)
                        .with_context(|| format!("user '{}'", user.username))?;
                    hash.clone()
                }
                (None, Some(plain)) => {
                    tracing::warn!(
                        "user '{}' has a plain text password in config; use password_hash outside development",
                        user.username
                    );
                    password::hash_password(plain)
                        .with_context(|| format!("Failed to hash password of '{}'", user.username))?
                }
                _ => bail!(
                    "user '{}': set exactly one of password_hash and password",
                    user.username
                ),
            };

            if directory.username_by_id.contains_key(&user.id) {
                bail!("duplicate user id '{}'", user.id);
            }
            if directory.by_username.contains_key(&username) {
                bail!("duplicate username '{}'", user.username);
            }

            directory
                .username_by_id
                .insert(user.id.clone(), username.clone());
            directory.by_username.insert(
                username,
                UserRecord {
                    id: user.id.clone(),
                    username: user.username.clone(),
                    name: user.name.clone(),
                    role: user.role,
                    password_hash,
                },
            );
        }

        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.by_username.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_username.is_empty()
    }

    pub fn get_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.by_username.get(&normalize_username(username))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&UserRecord> {
        self.username_by_id
            .get(id)
            .and_then(|username| self.by_username.get(username))
    }

    /// Verify credentials; `None` for unknown user or wrong password
    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<&UserRecord> {
        match self.get_by_username(username) {
            Some(user) => password::verify_password(&user.password_hash, password).then_some(user),
            None => {
                password::verify_password(&self.decoy_hash, password);
                None
            }
        }
    }

    pub fn count_by_role(&self, role: Role) -> usize {
        self.by_username.values().filter(|u| u.role == role).count()
    }
}

/// Hash of a random secret nobody knows
fn decoy_hash() -> Result<String> {
    let secret: u128 = rand::thread_rng().gen();
    password::hash_password(&secret.to_string()).context("Failed to prepare decoy hash")
}

/// Usernames are matched case-insensitively (they are often e-mail addresses)
fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str, role: Role, password: &str) -> UserConfig {
        UserConfig {
            id: id.into(),
            username: username.into(),
            name: format!("{username} name"),
            role,
            password_hash: None,
            password: Some(password.into()),
        }
    }

    #[test]
    fn test_verify_credentials() {
        let directory = UserDirectory::from_config(&[
            user("1", "Admin@Garage.com", Role::Admin, "pw1"),
            user("2", "jane", Role::User, "pw2"),
        ])
        .unwrap();

        assert_eq!(directory.len(), 2);
        let admin = directory.verify_credentials("admin@garage.com", "pw1").unwrap();
        assert_eq!(admin.id, "1");
        assert_eq!(admin.role, Role::Admin);
        assert!(directory.verify_credentials("jane", "pw1").is_none());
        assert!(directory.verify_credentials("nobody", "pw1").is_none());
        assert_eq!(directory.get_by_id("2").unwrap().username, "jane");
        assert_eq!(directory.count_by_role(Role::User), 1);
    }

    #[test]
    fn test_unknown_user_is_checked_against_decoy() {
        let directory = UserDirectory::from_config(&[user("1", "jane", Role::User, "pw")]).unwrap();
        assert!(password::validate_hash(&directory.decoy_hash).is_ok());
        assert!(directory.verify_credentials("ghost", "pw").is_none());
        assert!(directory.verify_credentials("ghost", "").is_none());

        let empty = UserDirectory::from_config(&[]).unwrap();
        assert!(password::validate_hash(&empty.decoy_hash).is_ok());
    }

    #[test]
    fn test_precomputed_hash_is_used() {
        let hash = password::hash_password("pw").unwrap();
        let mut config = user("1", "admin", Role::Admin, "unused");
        config.password = None;
        config.password_hash = Some(hash);
        let directory = UserDirectory::from_config(&[config]).unwrap();
        assert!(directory.verify_credentials("admin", "pw").is_some());
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        assert!(UserDirectory::from_config(&[
            user("1", "a", Role::Admin, "x"),
            user("2", "A", Role::User, "y"),
        ])
        .is_err());

        assert!(UserDirectory::from_config(&[
            user("1", "a", Role::Admin, "x"),
            user("1", "b", Role::User, "y"),
        ])
        .is_err());

        let mut both = user("1", "a", Role::Admin, "x");
        both.password_hash = Some("$argon2id$whatever".into());
        assert!(UserDirectory::from_config(&[both]).is_err());

        let mut neither = user("1", "a", Role::Admin, "x");
        neither.password = None;
        assert!(UserDirectory::from_config(&[neither]).is_err());

        let mut broken = user("1", "a", Role::Admin, "x");
        broken.password = None;
        broken.password_hash = Some("plain-text".into());
        assert!(UserDirectory::from_config(&[broken]).is_err());

        assert!(UserDirectory::from_config(&[user("1", "  ", Role::Admin, "x")]).is_err());
    }
}
