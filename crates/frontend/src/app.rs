use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::{Notifications, ToastHost};
use crate::routes::location::Location;
use crate::routes::policy::load_policy;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let policy = match load_policy() {
        Ok(policy) => policy,
        Err(e) => {
            log::error!("Startup aborted: {}", e);
            return view! {
                <div class="fatal-error">
                    <h1>"Configuration error"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    provide_context(Arc::new(policy));
    provide_context(Location::new());
    provide_context(Notifications::new());
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ToastHost />
    }
    .into_any()
}
