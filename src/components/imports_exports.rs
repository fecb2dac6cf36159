use yew::prelude::*;

use crate::models::supply::NetFlow;
use crate::utils::format::{PLACEHOLDER, format_mw, format_signed_mw};

#[derive(Properties, PartialEq)]
pub struct ImportsExportsProps {
    pub flow: Option<NetFlow>,
}

#[function_component(ImportsExports)]
pub fn imports_exports(props: &ImportsExportsProps) -> Html {
    let metric = |value: Option<f64>| match value {
        Some(mw) => html! {
            <>
                {format_mw(mw)}
                <span class="metric-unit">{"MW"}</span>
            </>
        },
        None => html! { {PLACEHOLDER} },
    };

    html! {
        <div class="card imports-exports">
            <h2>{"Imports & Exports"}</h2>

            <div class="flow-grid">
                <div class="metric">
                    <p class="metric-caption">{"↓ Hourly Imports"}</p>
                    <p class="metric-value">{metric(props.flow.map(|f| f.imports))}</p>
                </div>
                <div class="metric">
                    <p class="metric-caption">{"↑ Hourly Exports"}</p>
                    <p class="metric-value">{metric(props.flow.map(|f| f.exports))}</p>
                </div>
            </div>

            <div class="net-flow">
                <span class="metric-caption">{"Net Flow"}</span>
                {
                    match props.flow {
                        Some(flow) => {
                            let direction = flow.direction();
                            html! {
                                <span class={classes!("net-flow-value", direction.css_class())}
                                    title={direction.label()}>
                                    {format_signed_mw(flow.net())}
                                </span>
                            }
                        }
                        None => html! { <span class="net-flow-value">{PLACEHOLDER}</span> },
                    }
                }
            </div>
        </div>
    }
}
