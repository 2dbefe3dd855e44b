use contracts::domain::a105_invoice::aggregate::Invoice;
use leptos::prelude::*;

use crate::pages::billing::invoice_columns;
use crate::pages::entity_list::{entity_table, page_header, Collection};

/// Bills still waiting for labour are not shown to the customer
fn is_issued(invoice: &Invoice) -> bool {
    !invoice.is_unfilled()
}

#[component]
pub fn MyInvoicesPage() -> impl IntoView {
    let invoices = Collection::<Invoice>::load();

    view! {
        <div class="page">
            {page_header("My Invoices", "Bills for services on your vehicles.", invoices)}
            {entity_table(invoices, invoice_columns(), Some(is_issued))}
        </div>
    }
}
