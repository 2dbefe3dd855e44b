//! Picks the layout for the outcome of the route guard.

use contracts::system::access::Outcome;
use leptos::prelude::*;

use crate::layout::{AdminLayout, AuthLayout};
use crate::pages::render_page;
use crate::system::auth::guard::RouteGuard;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

fn render_outcome(outcome: Outcome) -> AnyView {
    match outcome {
        Outcome::RenderLogin => view! {
            <AuthLayout>
                <LoginPage />
            </AuthLayout>
        }
        .into_any(),
        Outcome::RenderPage(page) => view! {
            <AdminLayout>
                {render_page(&page)}
            </AdminLayout>
        }
        .into_any(),
        Outcome::NotFound => view! { <NotFoundPage /> }.into_any(),
        // handled by the guard itself
        Outcome::Loading | Outcome::Redirect(_) => ().into_any(),
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! { <RouteGuard render=render_outcome /> }
}
