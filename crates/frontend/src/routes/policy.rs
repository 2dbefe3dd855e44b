//! The route policy as loaded by the application.

use contracts::system::access::{PolicyError, RoutePolicy};
use leptos::prelude::*;
use std::sync::Arc;

use crate::pages;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("route policy is invalid: {0}")]
    Policy(#[from] PolicyError),
    #[error("no page view registered for {}", .0.join(", "))]
    MissingPages(Vec<String>),
}

/// Built-in policy, refused when a route has no page to show.
pub fn load_policy() -> Result<RoutePolicy, ConfigError> {
    let policy = RoutePolicy::builtin()?;
    check_pages(&policy, pages::REGISTERED_PAGES)?;
    Ok(policy)
}

fn check_pages(policy: &RoutePolicy, registered: &[&str]) -> Result<(), ConfigError> {
    let missing: Vec<String> = policy
        .routes()
        .iter()
        .map(|r| r.path())
        .filter(|path| !registered.contains(path))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingPages(missing))
    }
}

pub fn use_policy() -> Arc<RoutePolicy> {
    use_context::<Arc<RoutePolicy>>().expect("RoutePolicy not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_policy_loads() {
        let policy = load_policy().unwrap();
        assert!(policy.entry("/billing/:id/fill").is_some());
    }

    #[test]
    fn test_route_without_page_is_refused() {
        let policy = RoutePolicy::builtin().unwrap();
        let registered: Vec<&str> = pages::REGISTERED_PAGES
            .iter()
            .copied()
            .filter(|p| *p != "/reports")
            .collect();
        match check_pages(&policy, &registered) {
            Err(ConfigError::MissingPages(missing)) => assert_eq!(missing, vec!["/reports"]),
            other => panic!("expected missing page, got {other:?}"),
        }
    }
}
