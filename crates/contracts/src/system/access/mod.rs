pub mod navigation;
pub mod policy;
pub mod route;

pub use navigation::{AuthStatus, GuardState, Navigation, Outcome, PageRoute};
pub use policy::{PolicyError, RouteEntry, RouteMatch, RoutePolicy, LOGIN_PATH, ROOT_PATH};
pub use route::{normalize_path, PatternError, RouteParams, RoutePattern};
