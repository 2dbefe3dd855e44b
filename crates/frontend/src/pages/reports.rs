//! Figures over all invoices and job cards.

use contracts::domain::a103_job_card::aggregate::{JobCard, JobStatus};
use contracts::domain::a105_invoice::aggregate::Invoice;
use contracts::domain::a105_invoice::summary::BillingSummary;
use leptos::prelude::*;
use thaw::*;

use super::dashboard::stat_card;
use super::entity_list::{page_header, Collection};
use super::job_cards::status_badge;
use crate::shared::format::format_money;

const JOB_STATUSES: [JobStatus; 4] = [
    JobStatus::Pending,
    JobStatus::InProgress,
    JobStatus::Completed,
    JobStatus::Cancelled,
];

#[component]
pub fn ReportsPage() -> impl IntoView {
    let invoices = Collection::<Invoice>::load();
    let jobs = Collection::<JobCard>::load();

    let summary = Memo::new(move |_| {
        invoices
            .items
            .with(|items| BillingSummary::from_invoices(items.iter().flatten()))
    });

    view! {
        <div class="page">
            {page_header("Reports", "Revenue and workshop throughput.", invoices)}

            <div class="stat-row">
                {stat_card("Invoices", move || summary.get().invoice_count.to_string())}
                {stat_card("Collected", move || format_money(summary.get().collected))}
                {stat_card("Outstanding", move || format_money(summary.get().outstanding))}
                {stat_card("Overdue", move || summary.get().overdue_count.to_string())}
            </div>

            <div class="card">
                <h2 class="card__title">"Job cards by status"</h2>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Job cards"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {JOB_STATUSES.into_iter().map(|status| view! {
                            <TableRow>
                                <TableCell>{status_badge(status)}</TableCell>
                                <TableCell>{move || jobs.count(|j| j.status == status)}</TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
