use contracts::domain::a101_customer::aggregate::Customer;
use leptos::prelude::*;

use super::entity_list::{entity_table, page_header, Collection, Column};
use crate::shared::format::format_money;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let customers = Collection::<Customer>::load();

    let columns = vec![
        Column::text("Name", |c: &Customer| c.name.clone()),
        Column::text("Email", |c: &Customer| c.email.clone()),
        Column::text("Phone", |c: &Customer| c.phone.clone()),
        Column::text("Address", |c: &Customer| c.address.clone()),
        Column::text("Vehicles", |c: &Customer| c.vehicle_count.to_string()),
        Column::text("Total spent", |c: &Customer| format_money(c.total_spent)),
        Column::text("Since", |c: &Customer| c.created_at.clone()),
    ];

    view! {
        <div class="page">
            {page_header("Customers", "Customer database and contact details.", customers)}
            {entity_table(customers, columns, None)}
        </div>
    }
}
