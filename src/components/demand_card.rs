use std::rc::Rc;
use yew::prelude::*;

use super::sparkline::Sparkline;
use crate::models::forecast::Extreme;
use crate::utils::format::{PLACEHOLDER, format_mw};

/// Which end of the predicted curve a card reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandExtreme {
    Peak,
    Low,
}

impl DemandExtreme {
    pub fn title(&self) -> &'static str {
        match self {
            DemandExtreme::Peak => "Predicted Peak",
            DemandExtreme::Low => "Predicted Low",
        }
    }

    fn hour_caption(&self) -> &'static str {
        match self {
            DemandExtreme::Peak => "Peak Hour",
            DemandExtreme::Low => "Low Hour",
        }
    }

    fn demand_caption(&self) -> &'static str {
        match self {
            DemandExtreme::Peak => "Peak Demand",
            DemandExtreme::Low => "Low Demand",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            DemandExtreme::Peak => "↗",
            DemandExtreme::Low => "↘",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            DemandExtreme::Peak => "#00FFFF",
            DemandExtreme::Low => "#60A5FA",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            DemandExtreme::Peak => "demand-card-peak",
            DemandExtreme::Low => "demand-card-low",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DemandCardProps {
    pub kind: DemandExtreme,
    pub extreme: Option<Extreme>,
    pub sparkline: Rc<Vec<f64>>,
}

#[function_component(DemandCard)]
pub fn demand_card(props: &DemandCardProps) -> Html {
    let kind = props.kind;
    let hour = props
        .extreme
        .as_ref()
        .map_or(PLACEHOLDER, |e| e.hour.as_str())
        .to_string();

    html! {
        <div class={classes!("card", "demand-card", kind.css_class())}>
            <div class="card-title-row">
                <h2>{kind.title()}</h2>
                <span class="card-icon">{kind.icon()}</span>
            </div>

            <div class="metric">
                <p class="metric-caption">{kind.hour_caption()}</p>
                <p class="metric-hour">{hour}</p>
            </div>

            <div class="metric">
                <p class="metric-caption">{kind.demand_caption()}</p>
                <p class="metric-value">
                    if let Some(extreme) = &props.extreme {
                        {format_mw(extreme.demand)}
                        <span class="metric-unit">{"MW"}</span>
                    } else {
                        {PLACEHOLDER}
                    }
                </p>
            </div>

            <Sparkline
                values={props.sparkline.clone()}
                gradient_id={format!("sparkline-{}", kind.css_class())}
                color={kind.color()}
            />
        </div>
    }
}
