use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a user; decides which parts of the application they may open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Technician,
    /// End customer of the garage
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    /// Code of the role as stored in tokens, sessions and the route table
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Technician => "technician",
            Role::User => "user",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::Technician => "Technician",
            Role::User => "Customer",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Manager, Role::Technician, Role::User]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "technician" => Some(Role::Technician),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Staff roles work in the back office; `User` is the customer portal.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for role in Role::all() {
            assert_eq!(role.code().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        assert_eq!("owner".parse::<Role>(), Err(UnknownRole("owner".into())));
        assert_eq!("Admin".parse::<Role>(), Err(UnknownRole("Admin".into())));
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Role::Technician).unwrap(), "\"technician\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
