//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the signed-in
//! user with their role, and the logout action.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::location::use_location;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::access::LOGIN_PATH;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();
    let location = use_location();

    let logout = move |_| {
        auth.logout();
        location.navigate(LOGIN_PATH);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Garage Manager"</span>
            </div>

            <div class="top-header__actions">
                {move || auth.session().map(|session| view! {
                    <div class="top-header__user">
                        {icon("user")}
                        <span class="top-header__user-name">{session.name}</span>
                        <span class="top-header__role">{session.role.display_name()}</span>
                    </div>
                })}

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
