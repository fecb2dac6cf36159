use crate::models::forecast::ZeroActualPolicy;

/// API host used when `ENERGY_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Render the bundled sample snapshot when a fetch fails.
    ///
    /// `false` leaves the dashboard empty behind the error banner,
    /// `true` keeps the banner but fills every panel with fallback values.
    pub const FALLBACK_ON_ERROR: bool = false;

    /// How a zero realized demand is reported in the error column
    pub const ZERO_ACTUAL_POLICY: ZeroActualPolicy = ZeroActualPolicy::Absent;

    /// Spacing between y-axis gridlines (MW)
    pub const AXIS_TICK_STEP: f64 = 1000.0;

    /// Only ticks on multiples of this value carry a text label (MW)
    pub const AXIS_LABEL_STEP: f64 = 2000.0;

    /// Quiet period before charts re-render after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Base URL of the forecast API, baked in at build time
    pub fn api_base_url() -> String {
        option_env!("ENERGY_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
