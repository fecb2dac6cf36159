use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    DemandCard, DemandExtreme, ForecastChart, HourlyTable, ImportsExports, Status, SupplyBreakdown,
};
use crate::config::Config;
use crate::hooks::{use_forecast::use_forecast, use_hourly_data::use_hourly_data};
use crate::models::view::{ViewInputs, ViewModel};
use crate::services::fallback::{sample_forecast, sample_supply};

#[function_component(Analytics)]
pub fn analytics() -> Html {
    let forecast_state = use_forecast();
    let supply_state = use_hourly_data();

    let forecast = forecast_state.resolve(Config::FALLBACK_ON_ERROR, sample_forecast);
    let supply = supply_state.resolve(Config::FALLBACK_ON_ERROR, sample_supply);

    let errors: Vec<String> = [forecast_state.error(), supply_state.error()]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

    let view = ViewModel::assemble(&ViewInputs {
        series: forecast.as_deref().map(|f| &f.series),
        extremes: forecast.as_deref().map(|f| &f.extremes),
        supply: supply
            .as_deref()
            .map(|s| s.sources.as_slice())
            .unwrap_or_default(),
        net_flow: supply.as_deref().and_then(|s| s.net_flow()),
        timestamp: forecast.as_deref().and_then(|f| f.timestamp.as_deref()),
        now: Local::now().time(),
        ..ViewInputs::default()
    });

    let sparkline = Rc::new(view.sparkline);

    html! {
        <main class="app-main">
            <Status
                loading={forecast_state.is_loading() || supply_state.is_loading()}
                {errors}
                fallback={Config::FALLBACK_ON_ERROR}
            />

            if let Some(updated) = &view.last_updated {
                <p class="last-updated">
                    {"Last Updated: "}
                    <span class="last-updated-time">{updated}</span>
                </p>
            }

            <section class="summary-grid">
                <DemandCard
                    kind={DemandExtreme::Peak}
                    extreme={view.summary.peak.clone()}
                    sparkline={sparkline.clone()}
                />
                <DemandCard
                    kind={DemandExtreme::Low}
                    extreme={view.summary.low.clone()}
                    sparkline={sparkline}
                />
                <ImportsExports flow={view.net_flow} />
            </section>

            <ForecastChart points={Rc::new(view.chart)} axis={view.axis} />

            <HourlyTable
                left={Rc::new(view.table_left)}
                right={Rc::new(view.table_right)}
                highlighted={view.highlighted_row}
            />

            <SupplyBreakdown slices={Rc::new(view.slices)} />
        </main>
    }
}
