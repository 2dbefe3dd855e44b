use contracts::system::access::ROOT_PATH;
use leptos::prelude::*;
use thaw::*;

use crate::routes::location::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = location.path();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Nothing lives at " <code>{move || path.get()}</code></p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| location.navigate(ROOT_PATH)>
                "Back to start"
            </Button>
        </div>
    }
}
