use contracts::domain::a102_vehicle::aggregate::Vehicle;
use leptos::prelude::*;

use super::entity_list::{entity_table, page_header, Collection, Column};

pub(crate) fn vehicle_columns() -> Vec<Column<Vehicle>> {
    vec![
        Column::text("Vehicle", |v: &Vehicle| v.title()),
        Column::text("Plate", |v: &Vehicle| v.license_plate.clone()),
        Column::text("VIN", |v: &Vehicle| v.vin.clone()),
        Column::text("Color", |v: &Vehicle| v.color.clone()),
        Column::text("Last service", |v: &Vehicle| {
            v.last_service.clone().unwrap_or_else(|| "-".to_string())
        }),
        Column::text("Services", |v: &Vehicle| v.total_services.to_string()),
    ]
}

#[component]
pub fn VehiclesPage() -> impl IntoView {
    let vehicles = Collection::<Vehicle>::load();

    let mut columns = vehicle_columns();
    columns.insert(1, Column::text("Owner", |v: &Vehicle| v.owner.clone()));

    view! {
        <div class="page">
            {page_header("Vehicles", "Registered vehicles and their service history.", vehicles)}
            {entity_table(vehicles, columns, None)}
        </div>
    }
}
