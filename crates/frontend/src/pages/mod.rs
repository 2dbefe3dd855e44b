//! Page views behind the route policy.

pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod entity_list;
pub mod inventory;
pub mod job_cards;
pub mod portal;
pub mod reports;
pub mod settings;
pub mod vehicles;

use contracts::system::access::PageRoute;
use leptos::prelude::*;

use billing::{BillingPage, FillInvoicePage};
use customers::CustomersPage;
use dashboard::DashboardPage;
use inventory::InventoryPage;
use job_cards::JobCardsPage;
use portal::{MyDashboardPage, MyInvoicesPage, MyVehiclesPage, TrackServicePage};
use reports::ReportsPage;
use settings::SettingsPage;
use vehicles::VehiclesPage;

use crate::system::pages::not_found::NotFoundPage;

/// Route patterns `render_page` knows how to show.
pub const REGISTERED_PAGES: &[&str] = &[
    "/dashboard",
    "/customers",
    "/vehicles",
    "/job-cards",
    "/inventory",
    "/billing",
    "/billing/:id/fill",
    "/reports",
    "/settings",
    "/my-dashboard",
    "/track-service",
    "/my-vehicles",
    "/my-invoices",
];

pub fn render_page(page: &PageRoute) -> AnyView {
    match page.pattern.as_str() {
        "/dashboard" => view! { <DashboardPage /> }.into_any(),
        "/customers" => view! { <CustomersPage /> }.into_any(),
        "/vehicles" => view! { <VehiclesPage /> }.into_any(),
        "/job-cards" => view! { <JobCardsPage /> }.into_any(),
        "/inventory" => view! { <InventoryPage /> }.into_any(),
        "/billing" => view! { <BillingPage /> }.into_any(),
        "/billing/:id/fill" => match page.params.get("id") {
            Some(id) => view! { <FillInvoicePage id=id.to_string() /> }.into_any(),
            None => view! { <NotFoundPage /> }.into_any(),
        },
        "/reports" => view! { <ReportsPage /> }.into_any(),
        "/settings" => view! { <SettingsPage /> }.into_any(),
        "/my-dashboard" => view! { <MyDashboardPage /> }.into_any(),
        "/track-service" => view! { <TrackServicePage /> }.into_any(),
        "/my-vehicles" => view! { <MyVehiclesPage /> }.into_any(),
        "/my-invoices" => view! { <MyInvoicesPage /> }.into_any(),
        other => {
            log::error!("No page view for route {}", other);
            view! { <NotFoundPage /> }.into_any()
        }
    }
}
