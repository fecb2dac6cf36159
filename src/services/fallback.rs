use crate::models::{
    forecast::{ForecastSeries, ForecastSnapshot, HourlyForecastPoint, PeakLowSummary, hour_label},
    supply::{SupplySnapshot, SupplySource},
};

/// (predicted, actual) demand for each hour of the sample day, in MW
const SAMPLE_DEMAND: [(f64, f64); 24] = [
    (13850.0, 13810.0),
    (14020.0, 13990.0),
    (13680.0, 13720.0),
    (13450.0, 13480.0),
    (13290.0, 13310.0),
    (13420.0, 13450.0),
    (14100.0, 14120.0),
    (14890.0, 14850.0),
    (15420.0, 15390.0),
    (15680.0, 15710.0),
    (15550.0, 15520.0),
    (15480.0, 15500.0),
    (15390.0, 15410.0),
    (15320.0, 15300.0),
    (15450.0, 15480.0),
    (15620.0, 15590.0),
    (15710.0, 15740.0),
    (15740.0, 15720.0),
    (15650.0, 15680.0),
    (15380.0, 15410.0),
    (15120.0, 15090.0),
    (14780.0, 14810.0),
    (14420.0, 14390.0),
    (14050.0, 14080.0),
];

const SAMPLE_SUPPLY: [(&str, f64, &str); 6] = [
    ("Nuclear", 7320.0, "#8B5CF6"),
    ("Gas", 5215.0, "#EF4444"),
    ("Wind", 2782.0, "#10B981"),
    ("Hydro", 2788.0, "#3B82F6"),
    ("Solar", 82.0, "#FBBF24"),
    ("Biofuel", 20.0, "#84CC16"),
];

const SAMPLE_IMPORTS: f64 = 173.0;
const SAMPLE_EXPORTS: f64 = 1668.0;

/// Sample forecast shown when a fetch fails and fallback is enabled
pub fn sample_forecast() -> ForecastSnapshot {
    let points = (0u32..)
        .zip(SAMPLE_DEMAND)
        .map(|(hour, (predicted, actual))| {
            HourlyForecastPoint::new(hour_label(hour), predicted, Some(actual))
        })
        .collect();

    let series = ForecastSeries::normalize(points);
    ForecastSnapshot {
        total_hours: series.len(),
        extremes: PeakLowSummary::from_series(&series),
        series,
        timestamp: None,
    }
}

/// Sample supply mix shown when a fetch fails and fallback is enabled
pub fn sample_supply() -> SupplySnapshot {
    SupplySnapshot {
        sources: SAMPLE_SUPPLY
            .iter()
            .map(|(source, mw, color)| SupplySource::new(*source, *mw, *color))
            .collect(),
        imports: Some(SAMPLE_IMPORTS),
        exports: Some(SAMPLE_EXPORTS),
        fetched_at: None,
        file_key: None,
    }
}
