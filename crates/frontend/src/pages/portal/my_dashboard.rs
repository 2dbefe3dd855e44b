use contracts::domain::a102_vehicle::aggregate::Vehicle;
use contracts::domain::a103_job_card::aggregate::JobCard;
use contracts::domain::a105_invoice::aggregate::{Invoice, PaymentStatus};
use leptos::prelude::*;

use crate::pages::dashboard::stat_card;
use crate::pages::entity_list::Collection;
use crate::system::auth::context::use_auth;

#[component]
pub fn MyDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let vehicles = Collection::<Vehicle>::load();
    let jobs = Collection::<JobCard>::load();
    let invoices = Collection::<Invoice>::load();

    let name = auth.session().map(|s| s.name).unwrap_or_default();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{format!("Hello, {}", name)}</h1>
                    <p class="header__subtitle">"Your vehicles, services and bills at a glance."</p>
                </div>
            </div>

            <div class="stat-row">
                {stat_card("My vehicles", move || vehicles.count(|_| true).to_string())}
                {stat_card("Services in progress", move || jobs.count(|j| j.status.is_active()).to_string())}
                {stat_card("Bills to pay", move || {
                    invoices
                        .count(|i| matches!(i.status, PaymentStatus::Pending | PaymentStatus::Overdue))
                        .to_string()
                })}
            </div>
        </div>
    }
}
