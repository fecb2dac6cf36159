pub mod about;
pub mod analytics;

pub use about::About;
pub use analytics::Analytics;
