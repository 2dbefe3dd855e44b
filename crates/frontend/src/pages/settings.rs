//! Read-only view of who may open which page.

use contracts::enums::role::Role;
use leptos::prelude::*;
use thaw::*;

use crate::routes::policy::use_policy;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let policy = use_policy();
    let roles = Role::all();

    let rows = policy
        .routes()
        .iter()
        .map(|entry| {
            let cells = roles
                .iter()
                .map(|role| {
                    let allowed = entry.allows(*role);
                    view! {
                        <TableCell>
                            {if allowed {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"yes"</Badge> }.into_any()
                            } else {
                                view! { <span class="access access--no">"-"</span> }.into_any()
                            }}
                        </TableCell>
                    }
                })
                .collect_view();
            let title = entry.title().to_string();
            let path = entry.path().to_string();
            view! {
                <TableRow>
                    <TableCell>{title}</TableCell>
                    <TableCell><code>{path}</code></TableCell>
                    {cells}
                </TableRow>
            }
        })
        .collect_view();

    let landing = roles
        .iter()
        .map(|role| {
            let name = role.display_name();
            let target = policy.landing_for(*role).to_string();
            view! {
                <TableRow>
                    <TableCell>{name}</TableCell>
                    <TableCell><code>{target}</code></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Settings"</h1>
                    <p class="header__subtitle">"Page access by role."</p>
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"Access matrix"</h2>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Page"</TableHeaderCell>
                            <TableHeaderCell>"Path"</TableHeaderCell>
                            {roles
                                .iter()
                                .map(|role| {
                                    let name = role.display_name();
                                    view! { <TableHeaderCell>{name}</TableHeaderCell> }
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            <div class="card">
                <h2 class="card__title">"Landing pages"</h2>
                <Table>
                    <TableBody>{landing}</TableBody>
                </Table>
            </div>
        </div>
    }
}
