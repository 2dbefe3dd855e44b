use contracts::domain::a103_job_card::aggregate::JobCard;
use leptos::prelude::*;

use crate::pages::entity_list::{entity_table, page_header, Collection, Column};
use crate::pages::job_cards::status_badge;
use crate::shared::format::format_money;

fn is_active(job: &JobCard) -> bool {
    job.status.is_active()
}

#[component]
pub fn TrackServicePage() -> impl IntoView {
    let jobs = Collection::<JobCard>::load();

    let columns = vec![
        Column::text("Job", |j: &JobCard| j.job_number.clone()),
        Column::text("Vehicle", |j: &JobCard| j.vehicle.clone()),
        Column::text("Services", |j: &JobCard| j.services.join(", ")),
        Column::view("Status", |j: &JobCard| status_badge(j.status)),
        Column::text("Estimate", |j: &JobCard| format_money(j.estimated_cost)),
        Column::text("Ready by", |j: &JobCard| j.due_date.clone()),
    ];

    view! {
        <div class="page">
            {page_header("Track Service", "Work currently done on your vehicles.", jobs)}
            {entity_table(jobs, columns, Some(is_active))}
        </div>
    }
}
