#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use energy_dashboard::hooks::DataState;
    use energy_dashboard::models::{
        axis::{MAX_TICKS, compute_range},
        error::AppError,
        forecast::{
            ForecastSeries, HourlyForecastPoint, PeakLowSummary, ZeroActualPolicy, hour_label,
            normalize, percentage_error,
        },
        supply::{FlowDirection, NetFlow, SupplySource, pie_slices},
        view::{ViewInputs, ViewModel},
    };
    use energy_dashboard::services::{
        api::{ApiConfig, parse_forecast, parse_hourly_data},
        fallback::{sample_forecast, sample_supply},
    };
    use std::rc::Rc;

    // Helper function to build a series from (hour, predicted, actual) tuples
    fn create_points(rows: &[(&str, f64, Option<f64>)]) -> Vec<HourlyForecastPoint> {
        rows.iter()
            .map(|(hour, predicted, actual)| HourlyForecastPoint::new(*hour, *predicted, *actual))
            .collect()
    }

    // Helper function returning the forecast document the backend serves
    fn forecast_json() -> &'static str {
        r#"{
            "forecast_data": [
                {"hour": "02:00", "predicted": 13680, "actual": 13720},
                {"hour": "00:00", "predicted": 13850, "actual": 13810},
                {"hour": "01:00", "predicted": 14020, "actual": null}
            ],
            "peak": {"hour": "01:00", "demand": 14020},
            "low": {"hour": "02:00", "demand": 13680},
            "timestamp": "2025-10-04 12:00 AM",
            "total_hours": 3
        }"#
    }

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 30, 0).unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
        assert!(!error.is_empty_data());
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
        assert!(error.is_empty_data());
    }

    // ===== Normalization Tests =====

    #[test]
    fn test_normalize_sorts_by_hour() {
        let series = normalize(create_points(&[
            ("02:00", 3.0, None),
            ("00:00", 1.0, None),
            ("01:00", 2.0, None),
        ]));

        let hours: Vec<&str> = series.iter().map(|p| p.hour.as_str()).collect();
        assert_eq!(hours, vec!["00:00", "01:00", "02:00"]);
    }

    #[test]
    fn test_normalize_is_a_permutation() {
        let raw: Vec<HourlyForecastPoint> = [7, 23, 0, 12, 3]
            .into_iter()
            .map(|h| HourlyForecastPoint::new(hour_label(h), f64::from(h) * 100.0, None))
            .collect();

        let series = normalize(raw.clone());
        assert_eq!(series.len(), raw.len());
        for point in &raw {
            assert!(series.points().contains(point));
        }
        assert!(series.points().windows(2).all(|w| w[0].hour <= w[1].hour));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(Vec::new()).is_empty());
    }

    // ===== Axis Range Tests =====

    #[test]
    fn test_axis_range_empty_default() {
        let range = compute_range(&[], 1000.0);
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 10000.0);
    }

    #[test]
    fn test_axis_range_bounds_observed_values() {
        let values = sample_forecast().series.value_set();
        let observed_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let observed_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let range = compute_range(&values, 1000.0);
        assert!(range.min <= observed_min);
        assert!(range.max >= observed_max);
        assert!(range.min >= 0.0);
        assert_eq!(range.min, 13000.0);
        assert_eq!(range.max, 16000.0);
    }

    // ===== Error Percentage Tests =====

    #[test]
    fn test_error_sign_follows_prediction() {
        let over = percentage_error(110.0, Some(100.0), ZeroActualPolicy::Absent).unwrap();
        let under = percentage_error(90.0, Some(100.0), ZeroActualPolicy::Absent).unwrap();
        let exact = percentage_error(100.0, Some(100.0), ZeroActualPolicy::Absent).unwrap();

        assert!(over > 0.0);
        assert!(under < 0.0);
        assert_eq!(exact, 0.0);
    }

    #[test]
    fn test_error_for_first_sample_hour() {
        let error = percentage_error(13850.0, Some(13810.0), ZeroActualPolicy::Absent).unwrap();
        assert!((error - 0.2896).abs() < 0.001);
    }

    #[test]
    fn test_error_missing_actual() {
        assert_eq!(percentage_error(13850.0, None, ZeroActualPolicy::Absent), None);
        assert_eq!(percentage_error(13850.0, Some(0.0), ZeroActualPolicy::Absent), None);
    }

    // ===== Supply Tests =====

    #[test]
    fn test_sample_nuclear_share() {
        let slices = pie_slices(&sample_supply().sources);
        let nuclear = slices.iter().find(|s| s.source == "Nuclear").unwrap();
        assert!((nuclear.percentage - 40.2).abs() < 0.05);

        let total: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_zero_total() {
        let slices = pie_slices(&[SupplySource::new("Solar", 0.0, "#FBBF24")]);
        assert_eq!(slices[0].percentage, 0.0);
    }

    #[test]
    fn test_sample_net_flow_exports() {
        let flow = sample_supply().net_flow().unwrap();
        assert_eq!(flow.net(), 1495.0);
        assert_eq!(flow.direction(), FlowDirection::Export);
        assert_eq!(NetFlow::new(500.0, 100.0).direction(), FlowDirection::Import);
    }

    // ===== Parsing Tests =====

    #[test]
    fn test_parse_forecast_document() {
        let parsed = parse_forecast(forecast_json()).unwrap();
        assert!(parsed.rejected.is_empty());

        let snapshot = parsed.value;
        let hours: Vec<&str> = snapshot.series.iter().map(|p| p.hour.as_str()).collect();
        assert_eq!(hours, vec!["00:00", "01:00", "02:00"]);
        assert_eq!(snapshot.series.points()[1].actual, None);
        assert_eq!(snapshot.extremes.peak.unwrap().hour, "01:00");
        assert_eq!(snapshot.timestamp.as_deref(), Some("2025-10-04 12:00 AM"));
        assert_eq!(snapshot.total_hours, 3);
    }

    #[test]
    fn test_parse_forecast_drops_bad_points() {
        let body = r#"{"forecast_data": [
            {"hour": "25:00", "predicted": 100},
            {"hour": "03:00", "predicted": -5},
            {"hour": "04:00", "predicted": 100, "actual": -1}
        ]}"#;

        let parsed = parse_forecast(body).unwrap();
        assert_eq!(parsed.rejected.len(), 2);
        assert_eq!(parsed.value.series.len(), 1);
        assert_eq!(parsed.value.series.points()[0].actual, None);
    }

    #[test]
    fn test_parse_forecast_empty_is_data_error() {
        assert!(parse_forecast(r#"{"forecast_data": []}"#).unwrap_err().is_empty_data());
        assert!(parse_forecast("not json").unwrap_err().is_empty_data());
    }

    #[test]
    fn test_parse_hourly_data_document() {
        let body = r##"{
            "supply_breakdown": [
                {"source": "Nuclear", "mw": 7320, "color": "#8B5CF6"},
                {"source": "Other", "mw": 10}
            ],
            "imports": 173,
            "exports": 1668,
            "fetched_at": "2025-10-04T00:05:00",
            "file_key": ""
        }"##;

        let supply = parse_hourly_data(body).unwrap().value;
        assert_eq!(supply.sources.len(), 2);
        assert_eq!(supply.sources[1].color, "#9CA3AF");
        assert_eq!(supply.net_flow().unwrap().net(), 1495.0);
        assert_eq!(supply.file_key, None);
    }

    // ===== Api Config Tests =====

    #[test]
    fn test_api_config_urls() {
        let config = ApiConfig::builder().base_url("https://example.test/").build();
        assert_eq!(config.forecast_url(), "https://example.test/api/forecast/latest");
        assert_eq!(config.hourly_data_url(), "https://example.test/api/hourly-data/latest");
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_from_result() {
        let loaded: DataState<ForecastSeries> = DataState::from_result(Ok(ForecastSeries::default()));
        assert!(loaded.data().is_some());

        let empty: DataState<ForecastSeries> =
            DataState::from_result(Err(AppError::DataError("empty".to_string())));
        assert!(empty.data().unwrap().is_empty());
        assert_eq!(empty.error(), None);

        let failed: DataState<ForecastSeries> =
            DataState::from_result(Err(AppError::ApiError("HTTP 503".to_string())));
        assert_eq!(failed.error(), Some("API error: HTTP 503"));
    }

    #[test]
    fn test_data_state_resolve_fallback() {
        let failed: DataState<u32> = DataState::Error("down".to_string());
        assert_eq!(failed.resolve(false, || 7), None);
        assert_eq!(failed.resolve(true, || 7), Some(Rc::new(7)));

        let loading: DataState<u32> = DataState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.resolve(true, || 7), None);
    }

    // ===== View Model Tests =====

    #[test]
    fn test_view_model_all_absent() {
        let view = ViewModel::default();
        assert!(!view.has_forecast());
        assert_eq!(view.axis.min, 0.0);
        assert_eq!(view.axis.max, 10000.0);
        assert!(view.table_left.is_empty());
        assert!(view.table_right.is_empty());
        assert_eq!(view.highlighted_row, None);
        assert!(view.slices.is_empty());
        assert_eq!(view.summary, PeakLowSummary::default());
        assert_eq!(view.net_flow, None);
        assert_eq!(view.last_updated, None);
    }

    #[test]
    fn test_view_model_sample_day() {
        let forecast = sample_forecast();
        let supply = sample_supply();

        let view = ViewModel::assemble(&ViewInputs {
            series: Some(&forecast.series),
            extremes: Some(&forecast.extremes),
            supply: &supply.sources,
            net_flow: supply.net_flow(),
            timestamp: Some("12:00 AM"),
            now: at(10),
            ..ViewInputs::default()
        });

        assert_eq!(view.chart.len(), 24);
        assert_eq!(view.table_left.len(), 12);
        assert_eq!(view.table_right.len(), 12);
        assert_eq!(view.table_right[0].hour, "12:00");
        assert_eq!(view.highlighted_row, Some(9));
        assert_eq!(view.summary.peak.unwrap().hour, "17:00");
        assert_eq!(view.total_supply, 18207.0);
        assert_eq!(view.last_updated.as_deref(), Some("12:00 AM"));
    }

    #[test]
    fn test_view_model_no_highlight_at_midnight() {
        let forecast = sample_forecast();
        let view = ViewModel::assemble(&ViewInputs {
            series: Some(&forecast.series),
            now: at(0),
            ..ViewInputs::default()
        });

        assert_eq!(view.highlighted_row, None);
    }

    #[test]
    fn test_view_model_survives_huge_demand() {
        let body = r#"{"forecast_data": [
            {"hour": "00:00", "predicted": 1e25, "actual": null},
            {"hour": "01:00", "predicted": 14000, "actual": 1e25}
        ]}"#;
        let forecast = parse_forecast(body).unwrap().value;
        assert_eq!(forecast.series.len(), 1);

        let view = ViewModel::assemble(&ViewInputs {
            series: Some(&forecast.series),
            ..ViewInputs::default()
        });
        assert_eq!(view.axis.min, 12000.0);
        assert_eq!(view.axis.max, 16000.0);

        let only_huge = r#"{"forecast_data": [{"hour": "00:00", "predicted": 1e25}]}"#;
        assert!(parse_forecast(only_huge).unwrap_err().is_empty_data());

        let unchecked = normalize(create_points(&[("00:00", 1e25, None)]));
        let view = ViewModel::assemble(&ViewInputs {
            series: Some(&unchecked),
            ..ViewInputs::default()
        });
        assert!(view.axis.max >= 1e25);
        assert!(view.axis.ticks.len() <= MAX_TICKS + 3);
    }

    #[test]
    fn test_view_model_recomputes_missing_extremes() {
        let series = normalize(create_points(&[
            ("00:00", 200.0, None),
            ("01:00", 500.0, None),
            ("02:00", 100.0, None),
        ]));

        let view = ViewModel::assemble(&ViewInputs {
            series: Some(&series),
            extremes: None,
            ..ViewInputs::default()
        });

        assert_eq!(view.summary.peak.unwrap().hour, "01:00");
        assert_eq!(view.summary.low.unwrap().hour, "02:00");
    }
}
