use contracts::domain::a102_vehicle::aggregate::Vehicle;
use leptos::prelude::*;

use crate::pages::entity_list::{entity_table, page_header, Collection};
use crate::pages::vehicles::vehicle_columns;

#[component]
pub fn MyVehiclesPage() -> impl IntoView {
    let vehicles = Collection::<Vehicle>::load();

    view! {
        <div class="page">
            {page_header("My Vehicles", "Vehicles registered with the garage.", vehicles)}
            {entity_table(vehicles, vehicle_columns(), None)}
        </div>
    }
}
