pub mod fill_invoice;

use contracts::domain::a105_invoice::aggregate::{Invoice, PaymentStatus};
use contracts::domain::a105_invoice::summary::BillingSummary;
use leptos::prelude::*;
use thaw::*;

use super::entity_list::{badge, entity_table, page_header, Collection, Column};
use crate::routes::location::use_location;
use crate::shared::format::format_money;

pub use fill_invoice::FillInvoicePage;

fn payment_tone(status: PaymentStatus) -> BadgeColor {
    match status {
        PaymentStatus::Paid => BadgeColor::Success,
        PaymentStatus::Pending => BadgeColor::Warning,
        PaymentStatus::Overdue => BadgeColor::Danger,
        PaymentStatus::Cancelled => BadgeColor::Subtle,
    }
}

pub(crate) fn payment_badge(status: PaymentStatus) -> AnyView {
    badge(status.display_name(), payment_tone(status))
}

pub(crate) fn invoice_columns() -> Vec<Column<Invoice>> {
    vec![
        Column::text("Invoice", |i: &Invoice| i.invoice_number.clone()),
        Column::text("Job card", |i: &Invoice| i.job_card.clone()),
        Column::text("Amount", |i: &Invoice| format_money(i.amount)),
        Column::text("Tax", |i: &Invoice| format_money(i.tax)),
        Column::text("Total", |i: &Invoice| format_money(i.total)),
        Column::view("Status", |i: &Invoice| payment_badge(i.status)),
        Column::text("Due", |i: &Invoice| i.due_date.clone()),
    ]
}

pub fn fill_path(invoice_id: &str) -> String {
    format!("/billing/{}/fill", invoice_id)
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let invoices = Collection::<Invoice>::load();
    let location = use_location();

    let summary = Memo::new(move |_| {
        invoices
            .items
            .with(|items| BillingSummary::from_invoices(items.iter().flatten()))
    });

    let mut columns = invoice_columns();
    columns.insert(1, Column::text("Customer", |i: &Invoice| i.customer.clone()));
    columns.push(Column::view("", move |i: &Invoice| {
        if !i.is_unfilled() {
            return ().into_any();
        }
        let path = fill_path(&i.id);
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Small
                on_click=move |_| location.navigate(&path)
            >
                "Fill bill"
            </Button>
        }
        .into_any()
    }));

    view! {
        <div class="page">
            {page_header("Billing", "Invoices and payments.", invoices)}
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-card__label">"Collected"</span>
                    <span class="stat-card__value">{move || format_money(summary.get().collected)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Outstanding"</span>
                    <span class="stat-card__value">{move || format_money(summary.get().outstanding)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Bills to fill"</span>
                    <span class="stat-card__value">{move || summary.get().unfilled_count}</span>
                </div>
            </div>
            {entity_table(invoices, columns, None)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_invoices_stand_out() {
        assert!(matches!(payment_tone(PaymentStatus::Overdue), BadgeColor::Danger));
        assert!(matches!(payment_tone(PaymentStatus::Paid), BadgeColor::Success));
        assert!(matches!(payment_tone(PaymentStatus::Cancelled), BadgeColor::Subtle));
    }

    #[test]
    fn test_fill_path() {
        assert_eq!(fill_path("inv-7"), "/billing/inv-7/fill");
    }
}
