use super::aggregate::{Invoice, PaymentStatus};

/// Billing figures over a set of invoices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingSummary {
    pub invoice_count: usize,
    /// Sum of paid totals
    pub collected: f64,
    /// Sum of pending and overdue totals
    pub outstanding: f64,
    pub overdue_count: usize,
    /// Pending bills whose labour has not been entered yet
    pub unfilled_count: usize,
}

impl BillingSummary {
    pub fn from_invoices<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> Self {
        let mut summary = Self::default();
        for invoice in invoices {
            summary.invoice_count += 1;
            match invoice.status {
                PaymentStatus::Paid => summary.collected += invoice.total,
                PaymentStatus::Pending => summary.outstanding += invoice.total,
                PaymentStatus::Overdue => {
                    summary.outstanding += invoice.total;
                    summary.overdue_count += 1;
                }
                PaymentStatus::Cancelled => {}
            }
            if invoice.is_unfilled() {
                summary.unfilled_count += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(status: PaymentStatus, total: f64) -> Invoice {
        Invoice {
            id: "1".into(),
            invoice_number: "INV-1".into(),
            customer: "John Smith".into(),
            job_card: "JC-1".into(),
            amount: total,
            tax: 0.0,
            total,
            status,
            due_date: "2024-04-01".into(),
            created_at: "2024-03-01".into(),
            paid_at: None,
        }
    }

    #[test]
    fn test_summary() {
        let invoices = vec![
            invoice(PaymentStatus::Paid, 230.0),
            invoice(PaymentStatus::Paid, 100.0),
            invoice(PaymentStatus::Pending, 0.0),
            invoice(PaymentStatus::Overdue, 57.5),
            invoice(PaymentStatus::Cancelled, 999.0),
        ];
        let summary = BillingSummary::from_invoices(&invoices);
        assert_eq!(summary.invoice_count, 5);
        assert_eq!(summary.collected, 330.0);
        assert_eq!(summary.outstanding, 57.5);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.unfilled_count, 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(BillingSummary::from_invoices(&[]), BillingSummary::default());
    }
}
