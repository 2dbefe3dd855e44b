//! Workshop overview for back-office staff.

use contracts::domain::a103_job_card::aggregate::JobCard;
use contracts::domain::a104_inventory_item::aggregate::InventoryItem;
use contracts::domain::a105_invoice::aggregate::Invoice;
use leptos::prelude::*;
use thaw::*;

use super::billing::fill_path;
use super::entity_list::Collection;
use super::job_cards::status_badge;
use crate::routes::location::use_location;
use crate::shared::format::format_money;
use crate::system::auth::context::use_auth;

pub(crate) fn stat_card(label: &'static str, value: impl Fn() -> String + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let jobs = Collection::<JobCard>::load();
    let inventory = Collection::<InventoryItem>::load();
    let invoices = Collection::<Invoice>::load();

    let greeting = auth
        .session()
        .map(|s| format!("Welcome back, {}", s.name))
        .unwrap_or_default();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                    <p class="header__subtitle">{greeting}</p>
                </div>
            </div>

            <div class="stat-row">
                {stat_card("Active jobs", move || jobs.count(|j| j.status.is_active()).to_string())}
                {stat_card("Low stock items", move || inventory.count(InventoryItem::is_low_stock).to_string())}
                {stat_card("Bills to fill", move || invoices.count(Invoice::is_unfilled).to_string())}
            </div>

            <div class="card">
                <h2 class="card__title">"Active job cards"</h2>
                {move || match jobs.items.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(items) => {
                        let active: Vec<JobCard> = items.into_iter().filter(|j| j.status.is_active()).collect();
                        if active.is_empty() {
                            return view! { <div class="empty-state">"No active jobs"</div> }.into_any();
                        }
                        view! {
                            <ul class="list">
                                {active.into_iter().map(|j| view! {
                                    <li class="list__item">
                                        <span>{format!("{} - {}", j.job_number, j.vehicle)}</span>
                                        {status_badge(j.status)}
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </div>

            <div class="card">
                <h2 class="card__title">"Bills waiting for labour"</h2>
                {move || match invoices.items.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(items) => {
                        let unfilled: Vec<Invoice> = items.into_iter().filter(Invoice::is_unfilled).collect();
                        if unfilled.is_empty() {
                            return view! { <div class="empty-state">"All bills are filled"</div> }.into_any();
                        }
                        view! {
                            <ul class="list">
                                {unfilled.into_iter().map(|i| {
                                    let path = fill_path(&i.id);
                                    view! {
                                        <li class="list__item">
                                            <span>{format!("{} - {}", i.invoice_number, i.customer)}</span>
                                            <span>{format_money(i.total)}</span>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                size=ButtonSize::Small
                                                on_click=move |_| location.navigate(&path)
                                            >
                                                "Fill"
                                            </Button>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
