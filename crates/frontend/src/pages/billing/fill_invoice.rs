//! Entering labour and tax for a pending bill and sending it to the customer.

use contracts::domain::a105_invoice::aggregate::{FillInvoiceDto, Invoice};
use contracts::domain::a105_invoice::totals::{InvoiceTotals, DEFAULT_TAX_RATE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::routes::location::use_location;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

const BILLING_PATH: &str = "/billing";

fn parse_labour(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Unparsable rates become NaN so that validation rejects them
fn parse_rate(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

#[component]
pub fn FillInvoicePage(id: String) -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let location = use_location();
    let id = StoredValue::new(id);

    let invoice = RwSignal::new(None::<Invoice>);
    let labour = RwSignal::new(String::new());
    let tax_rate = RwSignal::new(DEFAULT_TAX_RATE.to_string());
    let (sending, set_sending) = signal(false);

    let client = auth.client();
    spawn_local({
        let client = client.clone();
        let invoice_id = id.get_value();
        async move {
            match client.fetch::<Invoice>(&invoice_id).await {
                Ok(found) => invoice.set(Some(found)),
                Err(e) => {
                    log::warn!("Loading invoice {} failed: {}", invoice_id, e);
                    notifications.error(format!("Could not load bill: {}", e.user_message()));
                }
            }
        }
    });

    let preview = Memo::new(move |_| {
        InvoiceTotals::preview(parse_labour(&labour.get()), parse_rate(&tax_rate.get()))
    });

    let on_submit = move |_| {
        let totals = match InvoiceTotals::compute(
            parse_labour(&labour.get_untracked()),
            parse_rate(&tax_rate.get_untracked()),
        ) {
            Ok(totals) => totals,
            Err(e) => {
                notifications.error(e.to_string());
                return;
            }
        };

        set_sending.set(true);
        let client = client.clone();
        let invoice_id = id.get_value();
        spawn_local(async move {
            let body = FillInvoiceDto::from(totals);
            match client.update::<Invoice, _>(&invoice_id, &body).await {
                Ok(_) => {
                    notifications.success("Bill sent to customer");
                    location.navigate(BILLING_PATH);
                }
                // the form keeps its values for another attempt
                Err(e) => {
                    log::warn!("Sending bill {} failed: {}", invoice_id, e);
                    notifications.error(format!("Failed to send bill: {}", e.user_message()));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <div class="header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| location.navigate(BILLING_PATH)
                >
                    {icon("arrow-left")}
                    " Back"
                </Button>
                <div class="header__content">
                    <h1 class="header__title">"Fill Bill"</h1>
                    <p class="header__subtitle">
                        {move || invoice.get()
                            .map(|i| format!("{} - {} ({})", i.invoice_number, i.customer, i.job_card))
                            .unwrap_or_else(|| id.get_value())}
                    </p>
                </div>
            </div>

            <div class="card">
                <div class="form-group">
                    <label>"Labour amount"</label>
                    <Input
                        value=labour
                        input_type=InputType::Number
                        placeholder="0.00"
                        disabled=Signal::derive(move || sending.get())
                    />
                </div>

                <div class="form-group">
                    <label>"Tax rate (%)"</label>
                    <Input
                        value=tax_rate
                        input_type=InputType::Number
                        disabled=Signal::derive(move || sending.get())
                    />
                </div>

                <div class="totals">
                    <div class="totals__row">
                        <span>"Labour"</span>
                        <span>{move || format_money(preview.get().labour)}</span>
                    </div>
                    <div class="totals__row">
                        <span>"Tax"</span>
                        <span>{move || format_money(preview.get().tax)}</span>
                    </div>
                    <div class="totals__row totals__row--total">
                        <span>"Total"</span>
                        <span>{move || format_money(preview.get().total)}</span>
                    </div>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || sending.get())
                >
                    {icon("send")}
                    {move || if sending.get() { " Sending..." } else { " Send to customer" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_parsing() {
        assert_eq!(parse_labour(" 120.5 "), 120.5);
        assert_eq!(parse_labour(""), 0.0);
        assert_eq!(parse_rate("15"), 15.0);
        assert!(parse_rate("abc").is_nan());
        assert!(InvoiceTotals::compute(parse_labour("100"), parse_rate("")).is_err());
    }
}
