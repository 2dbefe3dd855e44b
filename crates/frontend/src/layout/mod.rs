pub mod auth_layout;
pub mod global_context;
pub mod left;
pub mod notifications;
pub mod top_header;

pub use auth_layout::AuthLayout;

use leptos::prelude::*;
use global_context::AppGlobalContext;
use left::Sidebar;
use top_header::TopHeader;

/// Shell of a signed-in user.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
