pub mod axis;
pub mod error;
pub mod forecast;
pub mod supply;
pub mod view;
