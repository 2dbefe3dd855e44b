use contracts::system::access::{Navigation, Outcome};
use leptos::prelude::*;
use thaw::Spinner;

use super::context::use_auth;
use crate::routes::location::use_location;
use crate::routes::policy::use_policy;

/// Decision for the current location and session, recomputed when either changes.
pub fn use_navigation_outcome() -> Memo<Outcome> {
    let policy = use_policy();
    let status = use_auth().status();
    let location = use_location().path();
    Memo::new(move |_| Navigation::resolve(&policy, status.get(), &location.get()))
}

/// Route guard.
///
/// Shows a loading indicator until the session is known, replaces the
/// history entry on a redirect, and hands every other outcome to `render`.
#[component]
pub fn RouteGuard(render: impl Fn(Outcome) -> AnyView + Send + Sync + 'static) -> impl IntoView {
    let outcome = use_navigation_outcome();
    let location = use_location();

    Effect::new(move |_| {
        if let Outcome::Redirect(to) = outcome.get() {
            log::debug!("Redirect to {}", to);
            location.replace(&to);
        }
    });

    move || match outcome.get() {
        Outcome::Loading | Outcome::Redirect(_) => view! {
            <div class="spinner-container">
                <Spinner />
            </div>
        }
        .into_any(),
        other => render(other),
    }
}
