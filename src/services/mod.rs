pub mod api;
pub mod fallback;
