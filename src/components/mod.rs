pub mod demand_card;
pub mod footer;
pub mod forecast_chart;
pub mod header;
pub mod hourly_table;
pub mod imports_exports;
pub mod sparkline;
pub mod status;
pub mod supply_breakdown;

pub use demand_card::{DemandCard, DemandExtreme};
pub use footer::Footer;
pub use forecast_chart::ForecastChart;
pub use header::{Header, Page};
pub use hourly_table::HourlyTable;
pub use imports_exports::ImportsExports;
pub use status::Status;
pub use supply_breakdown::SupplyBreakdown;
