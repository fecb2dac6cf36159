use chrono::{NaiveTime, Timelike};

use super::axis::{AxisRange, compute_range};
use super::forecast::{
    DerivedHourlyRow, ForecastSeries, PeakLowSummary, ZeroActualPolicy, hour_label,
};
use super::supply::{NetFlow, PieSlice, SupplySource, pie_slices, total_supply};
use crate::config::Config;

/// Rows shown in each half of the hourly table
pub const TABLE_HALF_ROWS: usize = 12;

/// Everything the analytics page needs, before any of it is shaped
#[derive(Debug, Clone)]
pub struct ViewInputs<'a> {
    pub series: Option<&'a ForecastSeries>,
    /// Extremes reported by the API; these win over recomputed ones
    pub extremes: Option<&'a PeakLowSummary>,
    pub supply: &'a [SupplySource],
    pub net_flow: Option<NetFlow>,
    pub timestamp: Option<&'a str>,
    /// Wall-clock time used for the highlighted table row
    pub now: NaiveTime,
    pub zero_actual: ZeroActualPolicy,
    pub tick_step: f64,
}

impl Default for ViewInputs<'_> {
    fn default() -> Self {
        Self {
            series: None,
            extremes: None,
            supply: &[],
            net_flow: None,
            timestamp: None,
            now: NaiveTime::MIN,
            zero_actual: Config::ZERO_ACTUAL_POLICY,
            tick_step: Config::AXIS_TICK_STEP,
        }
    }
}

/// One x position on the demand chart; `actual` is a gap when `None`
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub hour: String,
    pub predicted: f64,
    pub actual: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub chart: Vec<ChartPoint>,
    pub axis: AxisRange,
    pub sparkline: Vec<f64>,
    pub table_left: Vec<DerivedHourlyRow>,
    pub table_right: Vec<DerivedHourlyRow>,
    /// Index into the full (unsplit) table
    pub highlighted_row: Option<usize>,
    pub slices: Vec<PieSlice>,
    pub total_supply: f64,
    pub summary: PeakLowSummary,
    pub net_flow: Option<NetFlow>,
    pub last_updated: Option<String>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::assemble(&ViewInputs::default())
    }
}

impl ViewModel {
    pub fn assemble(inputs: &ViewInputs<'_>) -> Self {
        let empty = ForecastSeries::default();
        let series = inputs.series.unwrap_or(&empty);

        let chart = series
            .iter()
            .map(|p| ChartPoint {
                hour: p.hour.clone(),
                predicted: p.predicted,
                actual: p.actual,
            })
            .collect();

        let mut table_left = series.error_rows(inputs.zero_actual);
        let table_right = table_left.split_off(table_left.len().min(TABLE_HALF_ROWS));

        Self {
            chart,
            axis: compute_range(&series.value_set(), inputs.tick_step),
            sparkline: series.predicted(),
            table_left,
            table_right,
            highlighted_row: highlighted_row(series, inputs.now),
            slices: pie_slices(inputs.supply),
            total_supply: total_supply(inputs.supply),
            summary: PeakLowSummary::resolve(inputs.extremes, series),
            net_flow: inputs.net_flow,
            last_updated: inputs
                .timestamp
                .map(str::trim)
                .filter(|t| !t.is_empty() && *t != "N/A")
                .map(str::to_string),
        }
    }

    pub fn has_forecast(&self) -> bool {
        !self.chart.is_empty()
    }
}

/// The row for the hour before `now`, looked up by its label.
///
/// There is no earlier hour on the same day at midnight, so nothing is
/// highlighted then.
pub fn highlighted_row(series: &ForecastSeries, now: NaiveTime) -> Option<usize> {
    match now.hour() {
        0 => None,
        hour => series.position_of(&hour_label(hour - 1)),
    }
}
