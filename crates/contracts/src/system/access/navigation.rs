//! Decision made on every navigation: show a page, show the login form,
//! wait for the session, or send the visitor elsewhere.

use super::policy::{RouteEntry, RouteMatch, RoutePolicy, LOGIN_PATH, ROOT_PATH};
use super::route::{normalize_path, RouteParams};
use crate::enums::role::Role;

/// What the guard knows about the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Persisted session has not been read yet
    Unresolved,
    Anonymous,
    Authenticated(Role),
}

/// Route guard state for one protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unresolved,
    Unauthenticated,
    Authorized,
    Unauthorized(Role),
}

impl GuardState {
    pub fn evaluate(status: AuthStatus, entry: &RouteEntry) -> Self {
        match status {
            AuthStatus::Unresolved => GuardState::Unresolved,
            AuthStatus::Anonymous => GuardState::Unauthenticated,
            AuthStatus::Authenticated(role) if entry.allows(role) => GuardState::Authorized,
            AuthStatus::Authenticated(role) => GuardState::Unauthorized(role),
        }
    }
}

/// Page picked for a path together with its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// Pattern of the policy entry, e.g. `/billing/:id/fill`
    pub pattern: String,
    pub params: RouteParams,
}

impl From<RouteMatch<'_>> for PageRoute {
    fn from(m: RouteMatch<'_>) -> Self {
        Self {
            pattern: m.entry.path().to_string(),
            params: m.params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loading,
    RenderLogin,
    RenderPage(PageRoute),
    /// Replace the current history entry with this path
    Redirect(String),
    NotFound,
}

pub struct Navigation;

impl Navigation {
    pub fn resolve(policy: &RoutePolicy, status: AuthStatus, path: &str) -> Outcome {
        let path = normalize_path(path);

        if path == ROOT_PATH {
            return match status {
                AuthStatus::Unresolved => Outcome::Loading,
                AuthStatus::Anonymous => Outcome::Redirect(LOGIN_PATH.to_string()),
                AuthStatus::Authenticated(role) => {
                    Outcome::Redirect(policy.landing_for(role).to_string())
                }
            };
        }

        if path == LOGIN_PATH {
            return match status {
                AuthStatus::Unresolved => Outcome::Loading,
                AuthStatus::Anonymous => Outcome::RenderLogin,
                AuthStatus::Authenticated(role) => {
                    Outcome::Redirect(policy.landing_for(role).to_string())
                }
            };
        }

        let Some(matched) = policy.match_path(path) else {
            return Outcome::NotFound;
        };

        match GuardState::evaluate(status, matched.entry) {
            GuardState::Unresolved => Outcome::Loading,
            GuardState::Unauthenticated => Outcome::Redirect(LOGIN_PATH.to_string()),
            GuardState::Authorized => Outcome::RenderPage(matched.into()),
            GuardState::Unauthorized(role) => {
                Outcome::Redirect(policy.landing_for(role).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports_admin_only() -> RoutePolicy {
        RoutePolicy::from_toml(
            r#"
[landing]
admin = "/dashboard"
manager = "/dashboard"
technician = "/dashboard"
user = "/my-dashboard"

[[routes]]
path = "/dashboard"
title = "Dashboard"
roles = ["admin", "manager", "technician"]

[[routes]]
path = "/reports"
title = "Reports"
roles = ["admin"]

[[routes]]
path = "/billing"
title = "Billing"
roles = ["admin", "manager"]

[[routes]]
path = "/my-dashboard"
title = "My Dashboard"
roles = ["user"]
"#,
        )
        .unwrap()
    }

    fn page(pattern: &str) -> Outcome {
        Outcome::RenderPage(PageRoute {
            pattern: pattern.to_string(),
            params: RouteParams::default(),
        })
    }

    #[test]
    fn test_admin_opens_reports() {
        let policy = reports_admin_only();
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Authenticated(Role::Admin), "/reports"),
            page("/reports")
        );
    }

    #[test]
    fn test_manager_is_sent_to_dashboard() {
        let policy = reports_admin_only();
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Authenticated(Role::Manager), "/reports"),
            Outcome::Redirect("/dashboard".into())
        );
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let policy = reports_admin_only();
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Anonymous, "/billing"),
            Outcome::Redirect("/login".into())
        );
    }

    #[test]
    fn test_customer_is_sent_to_own_dashboard() {
        let policy = RoutePolicy::from_toml(
            r#"
[landing]
admin = "/dashboard"
manager = "/reports"
technician = "/reports"
user = "/my-dashboard"

[[routes]]
path = "/dashboard"
title = "Dashboard"
roles = ["admin"]

[[routes]]
path = "/reports"
title = "Reports"
roles = ["manager", "technician"]

[[routes]]
path = "/my-dashboard"
title = "My Dashboard"
roles = ["user"]
"#,
        )
        .unwrap();
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Authenticated(Role::User), "/dashboard"),
            Outcome::Redirect("/my-dashboard".into())
        );
    }

    #[test]
    fn test_nothing_is_decided_while_unresolved() {
        let policy = reports_admin_only();
        for path in ["/", "/login", "/reports", "/billing/"] {
            assert_eq!(
                Navigation::resolve(&policy, AuthStatus::Unresolved, path),
                Outcome::Loading,
                "{path}"
            );
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let policy = reports_admin_only();
        for status in [
            AuthStatus::Unresolved,
            AuthStatus::Anonymous,
            AuthStatus::Authenticated(Role::Admin),
        ] {
            assert_eq!(
                Navigation::resolve(&policy, status, "/garage/secret"),
                Outcome::NotFound
            );
        }
    }

    #[test]
    fn test_root_and_login_redirects() {
        let policy = reports_admin_only();
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Anonymous, "/"),
            Outcome::Redirect("/login".into())
        );
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Authenticated(Role::User), "/"),
            Outcome::Redirect("/my-dashboard".into())
        );
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Anonymous, "/login"),
            Outcome::RenderLogin
        );
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Authenticated(Role::Manager), "/login"),
            Outcome::Redirect("/dashboard".into())
        );
    }

    #[test]
    fn test_access_iff_role_in_allowed_set() {
        let policy = RoutePolicy::builtin().unwrap();
        for entry in policy.routes() {
            let path = entry.path().replace(":id", "INV-1");
            for role in Role::all() {
                let outcome =
                    Navigation::resolve(&policy, AuthStatus::Authenticated(role), &path);
                if entry.allows(role) {
                    assert!(matches!(outcome, Outcome::RenderPage(_)), "{role} {path}");
                } else {
                    assert_eq!(
                        outcome,
                        Outcome::Redirect(policy.landing_for(role).to_string()),
                        "{role} {path}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_policy_drift_is_not_second_guessed() {
        // admin was left out of /settings; the table wins
        let policy = RoutePolicy::from_toml(
            r#"
[landing]
admin = "/dashboard"
manager = "/dashboard"
technician = "/dashboard"
user = "/my-dashboard"

[[routes]]
path = "/dashboard"
title = "Dashboard"
roles = ["admin", "manager", "technician"]

[[routes]]
path = "/settings"
title = "Settings"
roles = ["manager"]

[[routes]]
path = "/my-dashboard"
title = "My Dashboard"
roles = ["user"]
"#,
        )
        .unwrap();
        assert_eq!(
            Navigation::resolve(&policy, AuthStatus::Authenticated(Role::Admin), "/settings"),
            Outcome::Redirect("/dashboard".into())
        );
    }

    #[test]
    fn test_hidden_route_params_are_passed_on() {
        let policy = RoutePolicy::builtin().unwrap();
        let outcome = Navigation::resolve(
            &policy,
            AuthStatus::Authenticated(Role::Admin),
            "/billing/INV-2024-0042/fill?from=list",
        );
        let Outcome::RenderPage(page) = outcome else {
            panic!("expected page, got {outcome:?}");
        };
        assert_eq!(page.pattern, "/billing/:id/fill");
        assert_eq!(page.params.get("id"), Some("INV-2024-0042"));
    }
}
