use leptos::prelude::*;

/// Shell for visitors without a session: branding around the login form.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__brand">
                <h1>"Garage Manager"</h1>
                <p>"Workshop, billing and service tracking in one place"</p>
            </div>
            <div class="auth-layout__content">
                {children()}
            </div>
        </div>
    }
}
