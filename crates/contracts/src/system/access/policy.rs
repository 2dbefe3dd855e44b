//! Route policy: which roles may open which route, and where each role
//! lands by default.
//!
//! The table is plain TOML data. [`RoutePolicy::from_toml`] is the only way
//! to build one and it refuses anything inconsistent, so the rest of the
//! application can rely on the invariants below:
//!
//! - every route has a valid pattern and at least one known role
//! - no route shadows a public path (`/`, `/login`)
//! - hidden routes name a visible parent that admits all of their roles
//! - every role has a landing route, and that route admits the role

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::route::{normalize_path, PatternError, RouteParams, RoutePattern};
use crate::enums::role::Role;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

const DEFAULT_POLICY: &str = include_str!("default_policy.toml");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("route policy is not valid TOML: {0}")]
    Parse(String),
    #[error("{context}: unknown role '{role}'")]
    UnknownRole { context: String, role: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("route '{0}' does not allow any role")]
    EmptyRoles(String),
    #[error("route '{0}' is declared more than once")]
    DuplicateRoute(String),
    #[error("route '{0}' is public and cannot be role-gated")]
    PublicPath(String),
    #[error("menu route '{0}' needs a title")]
    MissingTitle(String),
    #[error("menu route '{0}' cannot have parameters")]
    MenuRouteHasParams(String),
    #[error("hidden route '{0}' must name its parent page")]
    MissingParent(String),
    #[error("route '{path}' names unknown parent '{parent}'")]
    UnknownParent { path: String, parent: String },
    #[error("route '{path}' names hidden route '{parent}' as parent")]
    HiddenParent { path: String, parent: String },
    #[error("route '{path}' allows role '{role}' which its parent '{parent}' does not")]
    RoleNotInParent {
        path: String,
        parent: String,
        role: Role,
    },
    #[error("role '{0}' has no landing route")]
    MissingLanding(Role),
    #[error("landing route '{path}' of role '{role}' is not in the table")]
    UnknownLanding { role: Role, path: String },
    #[error("landing route '{path}' does not allow its own role '{role}'")]
    LandingDenied { role: Role, path: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    #[serde(default)]
    landing: BTreeMap<String, String>,
    #[serde(default)]
    routes: Vec<RouteFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteFile {
    path: String,
    title: Option<String>,
    icon: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default = "default_menu")]
    menu: bool,
    parent: Option<String>,
}

fn default_menu() -> bool {
    true
}

/// One protected route and the roles allowed to open it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pattern: RoutePattern,
    title: String,
    icon: String,
    roles: BTreeSet<Role>,
    menu: bool,
    parent: Option<String>,
}

impl RouteEntry {
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_menu(&self) -> bool {
        self.menu
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

/// A browser path matched against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub params: RouteParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    routes: Vec<RouteEntry>,
    landing: BTreeMap<Role, String>,
}

impl RoutePolicy {
    /// Policy shipped with the application.
    pub fn builtin() -> Result<Self, PolicyError> {
        Self::from_toml(DEFAULT_POLICY)
    }

    pub fn from_toml(source: &str) -> Result<Self, PolicyError> {
        let file: PolicyFile =
            toml::from_str(source).map_err(|e| PolicyError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    fn from_file(file: PolicyFile) -> Result<Self, PolicyError> {
        let mut routes = Vec::with_capacity(file.routes.len());
        let mut seen = HashSet::new();

        for route in file.routes {
            let pattern = RoutePattern::parse(&route.path)?;
            if pattern.as_str() == ROOT_PATH || pattern.as_str() == LOGIN_PATH {
                return Err(PolicyError::PublicPath(route.path));
            }
            if !seen.insert(route.path.clone()) {
                return Err(PolicyError::DuplicateRoute(route.path));
            }

            let mut roles = BTreeSet::new();
            for code in &route.roles {
                let role = Role::from_code(code).ok_or_else(|| PolicyError::UnknownRole {
                    context: format!("route '{}'", route.path),
                    role: code.clone(),
                })?;
                roles.insert(role);
            }
            if roles.is_empty() {
                return Err(PolicyError::EmptyRoles(route.path));
            }

            let title = route.title.unwrap_or_default();
            if route.menu {
                if title.trim().is_empty() {
                    return Err(PolicyError::MissingTitle(route.path));
                }
                if pattern.has_params() {
                    return Err(PolicyError::MenuRouteHasParams(route.path));
                }
            } else if route.parent.is_none() {
                return Err(PolicyError::MissingParent(route.path));
            }

            routes.push(RouteEntry {
                pattern,
                title,
                icon: route.icon.unwrap_or_default(),
                roles,
                menu: route.menu,
                parent: route.parent,
            });
        }

        // Sub-pages are only reachable through their parent page.
        for entry in &routes {
            let Some(parent_path) = entry.parent() else {
                continue;
            };
            let parent = routes
                .iter()
                .find(|r| r.path() == parent_path)
                .ok_or_else(|| PolicyError::UnknownParent {
                    path: entry.path().to_string(),
                    parent: parent_path.to_string(),
                })?;
            if !parent.is_menu() {
                return Err(PolicyError::HiddenParent {
                    path: entry.path().to_string(),
                    parent: parent_path.to_string(),
                });
            }
            if let Some(role) = entry.roles.iter().find(|r| !parent.allows(**r)) {
                return Err(PolicyError::RoleNotInParent {
                    path: entry.path().to_string(),
                    parent: parent_path.to_string(),
                    role: *role,
                });
            }
        }

        let mut landing = BTreeMap::new();
        for (code, path) in file.landing {
            let role = Role::from_code(&code).ok_or_else(|| PolicyError::UnknownRole {
                context: "landing table".to_string(),
                role: code.clone(),
            })?;
            landing.insert(role, path);
        }
        for role in Role::all() {
            let path = landing.get(&role).ok_or(PolicyError::MissingLanding(role))?;
            let entry = routes
                .iter()
                .find(|r| r.path() == path && !r.pattern().has_params())
                .ok_or_else(|| PolicyError::UnknownLanding {
                    role,
                    path: path.clone(),
                })?;
            if !entry.allows(role) {
                return Err(PolicyError::LandingDenied {
                    role,
                    path: path.clone(),
                });
            }
        }

        Ok(Self { routes, landing })
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Entry declared with exactly this pattern.
    pub fn entry(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.path() == path)
    }

    /// First entry (in declaration order) whose pattern matches `path`.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(path);
        self.routes.iter().find_map(|entry| {
            entry
                .pattern
                .matches(path)
                .map(|params| RouteMatch { entry, params })
        })
    }

    pub fn allows(&self, path: &str, role: Role) -> bool {
        self.match_path(path)
            .map(|m| m.entry.allows(role))
            .unwrap_or(false)
    }

    pub fn landing_for(&self, role: Role) -> &str {
        // validation guarantees an entry for every role
        self.landing
            .get(&role)
            .map(String::as_str)
            .unwrap_or(LOGIN_PATH)
    }

    /// Sidebar entries for a role, in table order.
    pub fn menu_for(&self, role: Role) -> Vec<&RouteEntry> {
        self.routes
            .iter()
            .filter(|r| r.is_menu() && r.allows(role))
            .collect()
    }

    /// Menu entry to highlight for `path`: the route itself, or the parent
    /// of a hidden sub-page.
    pub fn menu_path_for(&self, path: &str) -> Option<&str> {
        let matched = self.match_path(path)?;
        if matched.entry.is_menu() {
            Some(matched.entry.path())
        } else {
            matched.entry.parent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDING: &str = r#"
[landing]
admin = "/dashboard"
manager = "/dashboard"
technician = "/dashboard"
user = "/my-dashboard"
"#;

    const LANDING_ROUTES: &str = r#"
[[routes]]
path = "/dashboard"
title = "Dashboard"
roles = ["admin", "manager", "technician"]

[[routes]]
path = "/my-dashboard"
title = "My Dashboard"
roles = ["user"]
"#;

    fn policy_with(extra: &str) -> Result<RoutePolicy, PolicyError> {
        RoutePolicy::from_toml(&format!("{LANDING}{LANDING_ROUTES}{extra}"))
    }

    #[test]
    fn test_builtin_policy_is_valid() {
        let policy = RoutePolicy::builtin().unwrap();
        assert_eq!(policy.landing_for(Role::Admin), "/dashboard");
        assert_eq!(policy.landing_for(Role::User), "/my-dashboard");
        assert!(policy.allows("/reports", Role::Admin));
        assert!(!policy.allows("/reports", Role::Manager));
        assert!(policy.allows("/billing/INV-1/fill", Role::Manager));
        assert!(!policy.allows("/billing/INV-1/fill", Role::Technician));
        assert!(!policy.allows("/dashboard", Role::User));
    }

    #[test]
    fn test_menu_matches_guard() {
        let policy = RoutePolicy::builtin().unwrap();
        for role in Role::all() {
            let menu = policy.menu_for(role);
            assert!(!menu.is_empty());
            for entry in &menu {
                assert!(policy.allows(entry.path(), role), "{role} sees {}", entry.path());
            }
            // every route the role may open is in its menu or hangs off a menu parent
            for entry in policy.routes().iter().filter(|e| e.allows(role)) {
                let anchor = if entry.is_menu() {
                    entry.path()
                } else {
                    entry.parent().unwrap()
                };
                assert!(menu.iter().any(|m| m.path() == anchor));
            }
        }
    }

    #[test]
    fn test_technician_menu() {
        let policy = RoutePolicy::builtin().unwrap();
        let paths: Vec<&str> = policy
            .menu_for(Role::Technician)
            .iter()
            .map(|e| e.path())
            .collect();
        assert_eq!(paths, vec!["/dashboard", "/vehicles", "/job-cards", "/inventory"]);
    }

    #[test]
    fn test_menu_path_for_hidden_route_is_parent() {
        let policy = RoutePolicy::builtin().unwrap();
        assert_eq!(policy.menu_path_for("/billing/42/fill"), Some("/billing"));
        assert_eq!(policy.menu_path_for("/billing/"), Some("/billing"));
        assert_eq!(policy.menu_path_for("/nowhere"), None);
    }

    #[test]
    fn test_unknown_role_fails() {
        let err = policy_with(
            r#"
[[routes]]
path = "/reports"
title = "Reports"
roles = ["admin", "owner"]
"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PolicyError::UnknownRole {
                context: "route '/reports'".into(),
                role: "owner".into()
            }
        );
    }

    #[test]
    fn test_empty_roles_fails() {
        let err = policy_with(
            r#"
[[routes]]
path = "/reports"
title = "Reports"
roles = []
"#,
        )
        .unwrap_err();
        assert_eq!(err, PolicyError::EmptyRoles("/reports".into()));
    }

    #[test]
    fn test_public_and_duplicate_paths_fail() {
        let err = policy_with(
            r#"
[[routes]]
path = "/login"
title = "Login"
roles = ["admin"]
"#,
        )
        .unwrap_err();
        assert_eq!(err, PolicyError::PublicPath("/login".into()));

        let err = policy_with(
            r#"
[[routes]]
path = "/dashboard"
title = "Again"
roles = ["admin"]
"#,
        )
        .unwrap_err();
        assert_eq!(err, PolicyError::DuplicateRoute("/dashboard".into()));
    }

    #[test]
    fn test_hidden_route_rules() {
        let err = policy_with(
            r#"
[[routes]]
path = "/billing/:id/fill"
roles = ["admin"]
menu = false
"#,
        )
        .unwrap_err();
        assert_eq!(err, PolicyError::MissingParent("/billing/:id/fill".into()));

        let err = policy_with(
            r#"
[[routes]]
path = "/billing/:id/fill"
roles = ["admin"]
menu = false
parent = "/billing"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::UnknownParent { .. }));

        let err = policy_with(
            r#"
[[routes]]
path = "/billing"
title = "Billing"
roles = ["admin"]

[[routes]]
path = "/billing/:id/fill"
roles = ["admin", "manager"]
menu = false
parent = "/billing"
"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PolicyError::RoleNotInParent {
                path: "/billing/:id/fill".into(),
                parent: "/billing".into(),
                role: Role::Manager,
            }
        );
    }

    #[test]
    fn test_menu_route_needs_title_and_no_params() {
        let err = policy_with(
            r#"
[[routes]]
path = "/reports"
roles = ["admin"]
"#,
        )
        .unwrap_err();
        assert_eq!(err, PolicyError::MissingTitle("/reports".into()));

        let err = policy_with(
            r#"
[[routes]]
path = "/reports/:year"
title = "Reports"
roles = ["admin"]
"#,
        )
        .unwrap_err();
        assert_eq!(err, PolicyError::MenuRouteHasParams("/reports/:year".into()));
    }

    #[test]
    fn test_landing_rules() {
        let err = RoutePolicy::from_toml(&format!(
            r#"
[landing]
admin = "/dashboard"
manager = "/dashboard"
technician = "/dashboard"
{LANDING_ROUTES}"#
        ))
        .unwrap_err();
        assert_eq!(err, PolicyError::MissingLanding(Role::User));

        let err = RoutePolicy::from_toml(&format!(
            r#"
[landing]
admin = "/dashboard"
manager = "/dashboard"
technician = "/dashboard"
user = "/dashboard"
{LANDING_ROUTES}"#
        ))
        .unwrap_err();
        assert_eq!(
            err,
            PolicyError::LandingDenied {
                role: Role::User,
                path: "/dashboard".into()
            }
        );

        let err = RoutePolicy::from_toml(&format!(
            r#"
[landing]
admin = "/home"
manager = "/dashboard"
technician = "/dashboard"
user = "/my-dashboard"
{LANDING_ROUTES}"#
        ))
        .unwrap_err();
        assert!(matches!(err, PolicyError::UnknownLanding { role: Role::Admin, .. }));

        let err = RoutePolicy::from_toml(&format!(
            r#"
[landing]
admin = "/dashboard"
manager = "/dashboard"
technician = "/dashboard"
user = "/my-dashboard"
guest = "/dashboard"
{LANDING_ROUTES}"#
        ))
        .unwrap_err();
        assert!(matches!(err, PolicyError::UnknownRole { .. }));
    }

    #[test]
    fn test_malformed_toml_fails() {
        assert!(matches!(
            RoutePolicy::from_toml("routes = 5"),
            Err(PolicyError::Parse(_))
        ));
        assert!(matches!(
            RoutePolicy::from_toml("[[routes]]\npath = \"/x\"\nrolez = [\"admin\"]"),
            Err(PolicyError::Parse(_))
        ));
    }

    #[test]
    fn test_declaration_order_wins() {
        let policy = policy_with(
            r#"
[[routes]]
path = "/billing"
title = "Billing"
roles = ["admin", "manager"]

[[routes]]
path = "/billing/new"
roles = ["admin"]
menu = false
parent = "/billing"

[[routes]]
path = "/billing/:id"
roles = ["admin", "manager"]
menu = false
parent = "/billing"
"#,
        )
        .unwrap();
        let matched = policy.match_path("/billing/new").unwrap();
        assert_eq!(matched.entry.path(), "/billing/new");
        assert!(matched.params.is_empty());
        let matched = policy.match_path("/billing/INV-3").unwrap();
        assert_eq!(matched.entry.path(), "/billing/:id");
        assert_eq!(matched.params.get("id"), Some("INV-3"));
    }
}
