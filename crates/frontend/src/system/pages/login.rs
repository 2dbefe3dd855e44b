use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let notifications = use_notifications();

    let on_submit = move |_| {
        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            notifications.error("Please enter your username and password");
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match api::login(username_val, password_val).await {
                // the guard sends the new session to its landing page
                Ok(response) => {
                    if let Err(e) = auth.login(response) {
                        log::error!("Login response rejected: {}", e);
                        notifications.error("Login failed: incomplete answer from the server");
                    }
                }
                Err(e) if e.is_unauthorized() => {
                    notifications.error("Invalid username or password");
                }
                Err(e) => {
                    log::warn!("Login request failed: {}", e);
                    notifications.error(format!("Login failed: {}", e.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-box">
            <h2>"Sign in"</h2>

            <div class="form-group">
                <label>"Username"</label>
                <Input
                    value=username
                    placeholder="admin"
                    disabled=Signal::derive(move || is_loading.get())
                />
            </div>

            <div class="form-group">
                <label>"Password"</label>
                <Input
                    value=password
                    input_type=InputType::Password
                    disabled=Signal::derive(move || is_loading.get())
                />
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=on_submit
                disabled=Signal::derive(move || is_loading.get())
            >
                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
            </Button>
        </div>
    }
}
