use chrono::{NaiveTime, Timelike};

/// Decodes an `HH:MM` label into minutes since midnight
pub fn decode_hour(label: &str) -> Option<u32> {
    NaiveTime::parse_from_str(label.trim(), "%H:%M")
        .ok()
        .map(|t| t.hour() * 60 + t.minute())
}

/// Returns the canonical label for an hour of the day (`7` -> `"07:00"`)
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// What the error column shows when the realized demand is exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroActualPolicy {
    /// No percentage can be computed, show a placeholder
    #[default]
    Absent,
    /// Report the error as 0%
    Zero,
}

/// One hour of predicted and (optionally) realized demand, in MW
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecastPoint {
    pub hour: String,
    pub predicted: f64,
    /// `None` until the hour has been realized
    pub actual: Option<f64>,
}

impl HourlyForecastPoint {
    pub fn new(hour: impl Into<String>, predicted: f64, actual: Option<f64>) -> Self {
        Self {
            hour: hour.into(),
            predicted,
            actual,
        }
    }

    /// Minutes since midnight, `None` for a malformed label
    pub fn minutes(&self) -> Option<u32> {
        decode_hour(&self.hour)
    }
}

/// Table row with the signed prediction error
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedHourlyRow {
    pub hour: String,
    pub predicted: f64,
    pub actual: Option<f64>,
    /// Percentage, positive when the prediction overshot
    pub error: Option<f64>,
}

/// Signed percentage error of a prediction against the realized value
pub fn percentage_error(predicted: f64, actual: Option<f64>, policy: ZeroActualPolicy) -> Option<f64> {
    let actual = actual?;
    if actual == 0.0 {
        return match policy {
            ZeroActualPolicy::Absent => None,
            ZeroActualPolicy::Zero => Some(0.0),
        };
    }
    Some((predicted - actual) / actual * 100.0)
}

pub fn derive_error_row(point: &HourlyForecastPoint, policy: ZeroActualPolicy) -> DerivedHourlyRow {
    DerivedHourlyRow {
        hour: point.hour.clone(),
        predicted: point.predicted,
        actual: point.actual,
        error: percentage_error(point.predicted, point.actual, policy),
    }
}

/// Hour-ordered forecast, starting at 00:00
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    points: Vec<HourlyForecastPoint>,
}

impl ForecastSeries {
    /// Orders raw points by hour of day.
    ///
    /// The sort is stable: duplicate labels are all kept in delivery order.
    /// Labels that do not decode are placed after every valid hour.
    pub fn normalize(mut points: Vec<HourlyForecastPoint>) -> Self {
        points.sort_by_key(|p| p.minutes().unwrap_or(u32::MAX));
        Self { points }
    }

    pub fn points(&self) -> &[HourlyForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourlyForecastPoint> {
        self.points.iter()
    }

    /// Predicted demand in hour order
    pub fn predicted(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }

    /// Every present value across both predicted and actual
    pub fn value_set(&self) -> Vec<f64> {
        self.points
            .iter()
            .flat_map(|p| std::iter::once(p.predicted).chain(p.actual))
            .collect()
    }

    pub fn error_rows(&self, policy: ZeroActualPolicy) -> Vec<DerivedHourlyRow> {
        self.points
            .iter()
            .map(|p| derive_error_row(p, policy))
            .collect()
    }

    /// Index of the row labelled `hour`, if present
    pub fn position_of(&self, hour: &str) -> Option<usize> {
        self.points.iter().position(|p| p.hour == hour)
    }
}

/// Convenience wrapper around [`ForecastSeries::normalize`]
pub fn normalize(raw: Vec<HourlyForecastPoint>) -> ForecastSeries {
    ForecastSeries::normalize(raw)
}

/// A single extreme of the predicted curve
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub hour: String,
    pub demand: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeakLowSummary {
    pub peak: Option<Extreme>,
    pub low: Option<Extreme>,
}

impl PeakLowSummary {
    /// Argmax/argmin of predicted demand; the earliest hour wins a tie
    pub fn from_series(series: &ForecastSeries) -> Self {
        let mut peak: Option<&HourlyForecastPoint> = None;
        let mut low: Option<&HourlyForecastPoint> = None;

        for point in series.iter() {
            if peak.is_none_or(|p| point.predicted > p.predicted) {
                peak = Some(point);
            }
            if low.is_none_or(|l| point.predicted < l.predicted) {
                low = Some(point);
            }
        }

        let to_extreme = |p: &HourlyForecastPoint| Extreme {
            hour: p.hour.clone(),
            demand: p.predicted,
        };

        Self {
            peak: peak.map(to_extreme),
            low: low.map(to_extreme),
        }
    }

    /// Keeps API-supplied extremes and fills the gaps from the series
    pub fn resolve(supplied: Option<&Self>, series: &ForecastSeries) -> Self {
        let computed = Self::from_series(series);
        let supplied = supplied.cloned().unwrap_or_default();
        Self {
            peak: supplied.peak.or(computed.peak),
            low: supplied.low.or(computed.low),
        }
    }
}

/// Validated contents of the latest forecast document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSnapshot {
    pub series: ForecastSeries,
    /// Peak/low as reported by the API
    pub extremes: PeakLowSummary,
    pub timestamp: Option<String>,
    pub total_hours: usize,
}

impl ForecastSnapshot {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(hour: &str, predicted: f64, actual: Option<f64>) -> HourlyForecastPoint {
        HourlyForecastPoint::new(hour, predicted, actual)
    }

    #[test]
    fn test_decode_hour() {
        assert_eq!(decode_hour("00:00"), Some(0));
        assert_eq!(decode_hour("07:00"), Some(420));
        assert_eq!(decode_hour("23:00"), Some(1380));
        assert_eq!(decode_hour("24:00"), None);
        assert_eq!(decode_hour("noon"), None);
    }

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0), "00:00");
        assert_eq!(hour_label(9), "09:00");
        assert_eq!(hour_label(17), "17:00");
    }

    #[test]
    fn test_normalize_orders_by_hour() {
        let series = normalize(vec![
            point("13:00", 3.0, None),
            point("02:00", 2.0, Some(2.0)),
            point("00:00", 1.0, Some(1.0)),
        ]);

        let hours: Vec<&str> = series.iter().map(|p| p.hour.as_str()).collect();
        assert_eq!(hours, vec!["00:00", "02:00", "13:00"]);
        assert_eq!(series.points()[2].actual, None);
    }

    #[test]
    fn test_normalize_keeps_duplicates_in_delivery_order() {
        let series = normalize(vec![
            point("05:00", 10.0, None),
            point("01:00", 20.0, None),
            point("05:00", 30.0, None),
        ]);

        assert_eq!(series.len(), 3);
        assert_eq!(series.predicted(), vec![20.0, 10.0, 30.0]);
    }

    #[test]
    fn test_normalize_puts_bad_labels_last() {
        let series = normalize(vec![point("??", 1.0, None), point("04:00", 2.0, None)]);
        assert_eq!(series.points()[0].hour, "04:00");
        assert_eq!(series.points()[1].hour, "??");
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn test_error_sign_convention() {
        let policy = ZeroActualPolicy::Absent;
        assert_eq!(percentage_error(100.0, Some(100.0), policy), Some(0.0));
        assert!(percentage_error(110.0, Some(100.0), policy).unwrap() > 0.0);
        assert!(percentage_error(90.0, Some(100.0), policy).unwrap() < 0.0);
        assert_eq!(percentage_error(90.0, None, policy), None);
    }

    #[test]
    fn test_zero_actual_policy() {
        assert_eq!(percentage_error(50.0, Some(0.0), ZeroActualPolicy::Absent), None);
        assert_eq!(percentage_error(50.0, Some(0.0), ZeroActualPolicy::Zero), Some(0.0));
    }

    #[test]
    fn test_value_set_skips_missing_actuals() {
        let series = normalize(vec![point("00:00", 1.0, Some(2.0)), point("01:00", 3.0, None)]);
        assert_eq!(series.value_set(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_peak_low_first_occurrence_wins() {
        let series = normalize(vec![
            point("00:00", 5.0, None),
            point("01:00", 9.0, None),
            point("02:00", 9.0, None),
            point("03:00", 1.0, None),
            point("04:00", 1.0, None),
        ]);

        let summary = PeakLowSummary::from_series(&series);
        assert_eq!(summary.peak.unwrap().hour, "01:00");
        assert_eq!(summary.low.unwrap().hour, "03:00");
    }

    #[test]
    fn test_resolve_prefers_supplied_values() {
        let series = normalize(vec![point("00:00", 5.0, None), point("01:00", 9.0, None)]);
        let supplied = PeakLowSummary {
            peak: Some(Extreme {
                hour: "17:00".to_string(),
                demand: 15740.0,
            }),
            low: None,
        };

        let resolved = PeakLowSummary::resolve(Some(&supplied), &series);
        assert_eq!(resolved.peak.unwrap().demand, 15740.0);
        assert_eq!(resolved.low.unwrap().hour, "00:00");
    }

    #[test]
    fn test_empty_series_has_no_extremes() {
        let summary = PeakLowSummary::resolve(None, &ForecastSeries::default());
        assert_eq!(summary, PeakLowSummary::default());
    }
}
