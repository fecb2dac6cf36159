use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    datatype::DataPoint,
    element::{
        AxisLabel, AxisType, JsFunction, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip,
        Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{axis::AxisRange, view::ChartPoint};
use crate::utils::debounce::create_debounced_resize_listener;

const CHART_ID: &str = "demand-chart";
const PREDICTED_COLOR: &str = "#00FFFF";
const ACTUAL_COLOR: &str = "#FF9800";
const AXIS_COLOR: &str = "#9CA3AF";
const GRID_COLOR: &str = "#374151";

/// Unlabelled hours between labelled ones (00, 03, 06, ...)
const HOUR_LABEL_INTERVAL: i32 = 2;

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub points: Rc<Vec<ChartPoint>>,
    pub axis: AxisRange,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.points.clone(), props.axis.clone(), container_ref),
            |(points, axis, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, points, axis);

                    let points = points.clone();
                    let axis = axis.clone();
                    create_debounced_resize_listener(
                        move || render_chart(&container, &points, &axis),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="card forecast-chart-card">
            <div class="card-heading">
                <h2>{"24-Hour Energy Demand Forecast"}</h2>
                <p class="card-subtitle">{"Predicted vs. Actual demand in megawatts (MW)"}</p>
            </div>
            if props.points.is_empty() {
                <div class="empty-state">{"No forecast available"}</div>
            } else {
                <div class="chart-container" ref={container_ref}>
                    <div id={CHART_ID} />
                </div>
            }
        </div>
    }
}

fn render_chart(container: &HtmlElement, points: &[ChartPoint], axis: &AxisRange) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(points, axis);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(points: &[ChartPoint], axis: &AxisRange) -> CharmingChart {
    let hours: Vec<String> = points.iter().map(|p| p.hour.clone()).collect();
    let predicted: Vec<DataPoint> = points.iter().map(|p| DataPoint::from(p.predicted)).collect();
    // "-" is a missing value to the renderer, which leaves a gap in the line
    let actual: Vec<DataPoint> = points
        .iter()
        .map(|p| p.actual.map_or_else(|| DataPoint::from("-"), DataPoint::from))
        .collect();

    let step = axis
        .ticks
        .windows(2)
        .next()
        .map_or(Config::AXIS_TICK_STEP, |w| w[1] - w[0]);

    CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(
            Legend::new()
                .bottom("0%")
                .text_style(TextStyle::new().color(AXIS_COLOR)),
        )
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .top("6%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
                .data(hours)
                .axis_label(
                    AxisLabel::new()
                        .color(AXIS_COLOR)
                        .interval(HOUR_LABEL_INTERVAL)
                        .formatter(JsFunction::new_with_args(
                            "value",
                            "return value ? value.split(':')[0] : '';",
                        )),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("MW")
                .min(axis.min)
                .max(axis.max)
                .interval(step)
                .axis_label(
                    AxisLabel::new()
                        .color(AXIS_COLOR)
                        .formatter(JsFunction::new_with_args("value", &y_label_formatter(axis))),
                )
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .opacity(0.3)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Predicted Demand")
                .show_symbol(false)
                .smooth(true)
                .line_style(
                    LineStyle::new()
                        .color(PREDICTED_COLOR)
                        .width(2)
                        .type_(LineStyleType::Dashed),
                )
                .data(predicted),
        )
        .series(
            Line::new()
                .name("Actual Demand")
                .show_symbol(false)
                .smooth(true)
                .line_style(LineStyle::new().color(ACTUAL_COLOR).width(2))
                .data(actual),
        )
}

/// JS body that labels only the ticks on multiples of the label step
fn y_label_formatter(axis: &AxisRange) -> String {
    let labelled: Vec<String> = axis
        .ticks
        .iter()
        .filter(|t| AxisRange::is_labelled(**t, Config::AXIS_LABEL_STEP))
        .map(|t| format!("{t:.0}"))
        .collect();

    format!(
        "return [{}].includes(value) ? Math.round(value).toLocaleString() : '';",
        labelled.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::axis::compute_range;

    #[test]
    fn test_y_labels_on_label_step() {
        let axis = compute_range(&[13290.0, 15740.0], Config::AXIS_TICK_STEP);
        let body = y_label_formatter(&axis);
        assert!(body.starts_with("return [14000,16000].includes(value)"));
    }
}
