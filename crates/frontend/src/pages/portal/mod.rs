//! Customer portal. The backend scopes every collection to the token's owner.

pub mod my_dashboard;
pub mod my_invoices;
pub mod my_vehicles;
pub mod track_service;

pub use my_dashboard::MyDashboardPage;
pub use my_invoices::MyInvoicesPage;
pub use my_vehicles::MyVehiclesPage;
pub use track_service::TrackServicePage;
