use charming::{
    Chart as CharmingChart,
    datatype::DataPointItem,
    element::{ItemStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Pie,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::supply::PieSlice;
use crate::utils::debounce::create_debounced_resize_listener;
use crate::utils::format::format_mw;

const CHART_ID: &str = "supply-chart";

#[derive(Properties, PartialEq)]
pub struct SupplyBreakdownProps {
    pub slices: Rc<Vec<PieSlice>>,
}

#[function_component(SupplyBreakdown)]
pub fn supply_breakdown(props: &SupplyBreakdownProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.slices.clone(), container_ref),
            |(slices, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, slices);

                    let slices = slices.clone();
                    create_debounced_resize_listener(
                        move || render_chart(&container, &slices),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    if props.slices.is_empty() {
        return html! {
            <div class="card supply-breakdown">
                <h2>{"Supply Breakdown"}</h2>
                <div class="empty-state">{"No data available"}</div>
            </div>
        };
    }

    html! {
        <div class="card supply-breakdown">
            <h2>{"Supply Breakdown"}</h2>
            <div class="supply-grid">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th class="align-left">{"Source"}</th>
                            <th>{"MW"}</th>
                            <th>{"%"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            props.slices.iter().enumerate().map(|(i, slice)| {
                                let class = if i % 2 == 0 { "row-even" } else { "row-odd" };
                                html! {
                                    <tr key={slice.source.clone()} {class}>
                                        <td class="align-left source-cell">
                                            <span
                                                class="source-swatch"
                                                style={format!("background-color: {};", slice.color)}
                                            />
                                            {&slice.source}
                                        </td>
                                        <td>{format_mw(slice.mw)}</td>
                                        <td>{format!("{:.1}%", slice.percentage)}</td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>

                <div class="pie-container" ref={container_ref}>
                    <div id={CHART_ID} />
                </div>
            </div>
        </div>
    }
}

fn render_chart(container: &HtmlElement, slices: &[PieSlice]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(slices);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(slices: &[PieSlice]) -> CharmingChart {
    let data: Vec<DataPointItem> = slices
        .iter()
        .map(|slice| {
            DataPointItem::new(slice.mw)
                .name(slice.source.as_str())
                .item_style(ItemStyle::new().color(slice.color.as_str()))
        })
        .collect();

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter("{b}: {c} MW ({d}%)"),
        )
        .series(
            Pie::new()
                .name("Supply")
                .radius(vec!["45%", "70%"])
                .center(vec!["50%", "50%"])
                .data(data),
        )
}
