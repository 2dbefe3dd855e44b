//! Sidebar built from the route policy: a role sees exactly the menu routes
//! the guard would let it open.

use crate::routes::location::use_location;
use crate::routes::policy::use_policy;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    path: String,
    title: String,
    icon: String,
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let policy = use_policy();
    let auth = use_auth();
    let location = use_location();

    let items = {
        let policy = policy.clone();
        Memo::new(move |_| {
            auth.session()
                .map(|session| {
                    policy
                        .menu_for(session.role)
                        .into_iter()
                        .map(|entry| MenuItem {
                            path: entry.path().to_string(),
                            title: entry.title().to_string(),
                            icon: entry.icon().to_string(),
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    // sub-pages highlight their parent
    let current = location.path();
    let active = Memo::new(move |_| {
        current.with(|path| policy.menu_path_for(path).map(str::to_string))
    });

    view! {
        <nav class="app-sidebar__content">
            <For
                each=move || items.get()
                key=|item| item.path.clone()
                children=move |item: MenuItem| {
                    let path = StoredValue::new(item.path.clone());
                    view! {
                        <a
                            href={item.path.clone()}
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                active.get().as_deref() == Some(path.get_value().as_str())
                            }
                            on:click=move |ev| {
                                ev.prevent_default();
                                location.navigate(&path.get_value());
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(&item.icon)}
                                <span>{item.title.clone()}</span>
                            </div>
                        </a>
                    }
                }
            />
        </nav>
    }
}
