use serde::{Deserialize, Serialize};

use super::totals::InvoiceTotals;
use crate::domain::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub customer: String,
    pub job_card: String,
    pub amount: f64,
    pub tax: f64,
    pub total: f64,
    pub status: PaymentStatus,
    pub due_date: String,
    pub created_at: String,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl Invoice {
    /// Created from a job card but labour has not been billed yet
    pub fn is_unfilled(&self) -> bool {
        self.status == PaymentStatus::Pending && self.amount == 0.0
    }
}

impl Resource for Invoice {
    fn collection_name() -> &'static str {
        "invoices"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `PUT /api/invoices/{id}` sent when a bill is filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillInvoiceDto {
    pub amount: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl From<InvoiceTotals> for FillInvoiceDto {
    fn from(t: InvoiceTotals) -> Self {
        Self {
            amount: t.labour,
            tax_rate: t.tax_rate,
            tax: t.tax,
            total: t.total,
        }
    }
}
