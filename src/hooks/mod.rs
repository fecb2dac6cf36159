pub mod data_state;
pub mod use_forecast;
pub mod use_hourly_data;

pub use data_state::DataState;
