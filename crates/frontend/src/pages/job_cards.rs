use contracts::domain::a103_job_card::aggregate::{JobCard, JobStatus};
use leptos::prelude::*;
use thaw::BadgeColor;

use super::entity_list::{badge, entity_table, page_header, Collection, Column};
use crate::shared::format::format_money;

fn status_tone(status: JobStatus) -> BadgeColor {
    match status {
        JobStatus::Pending => BadgeColor::Warning,
        JobStatus::InProgress => BadgeColor::Informative,
        JobStatus::Completed => BadgeColor::Success,
        JobStatus::Cancelled => BadgeColor::Subtle,
    }
}

pub(crate) fn status_badge(status: JobStatus) -> AnyView {
    badge(status.display_name(), status_tone(status))
}

#[component]
pub fn JobCardsPage() -> impl IntoView {
    let jobs = Collection::<JobCard>::load();

    let columns = vec![
        Column::text("Job", |j: &JobCard| j.job_number.clone()),
        Column::text("Customer", |j: &JobCard| j.customer.clone()),
        Column::text("Vehicle", |j: &JobCard| j.vehicle.clone()),
        Column::text("Services", |j: &JobCard| j.services.join(", ")),
        Column::view("Status", |j: &JobCard| status_badge(j.status)),
        Column::text("Estimate", |j: &JobCard| format_money(j.estimated_cost)),
        Column::text("Assigned to", |j: &JobCard| j.assigned_to.clone()),
        Column::text("Due", |j: &JobCard| j.due_date.clone()),
    ];

    view! {
        <div class="page">
            {page_header("Job Cards", "Work orders in the workshop.", jobs)}
            {entity_table(jobs, columns, None)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones() {
        assert!(matches!(status_tone(JobStatus::Pending), BadgeColor::Warning));
        assert!(matches!(status_tone(JobStatus::InProgress), BadgeColor::Informative));
        assert!(matches!(status_tone(JobStatus::Completed), BadgeColor::Success));
    }
}
