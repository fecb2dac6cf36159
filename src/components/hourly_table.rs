use std::rc::Rc;
use yew::prelude::*;

use crate::models::forecast::DerivedHourlyRow;
use crate::models::view::TABLE_HALF_ROWS;
use crate::utils::format::{format_mw, format_optional_mw, format_percent};

#[derive(Properties, PartialEq)]
pub struct HourlyTableProps {
    pub left: Rc<Vec<DerivedHourlyRow>>,
    pub right: Rc<Vec<DerivedHourlyRow>>,
    /// Row index across both halves
    pub highlighted: Option<usize>,
}

#[function_component(HourlyTable)]
pub fn hourly_table(props: &HourlyTableProps) -> Html {
    if props.left.is_empty() {
        return html! {
            <div class="card hourly-table">
                <h2>{"Hourly Breakdown"}</h2>
                <div class="empty-state">{"No data available"}</div>
            </div>
        };
    }

    html! {
        <div class="card hourly-table">
            <h2>{"Hourly Breakdown"}</h2>
            <div class="table-pair">
                {render_half(&props.left, 0, props.highlighted)}
                if !props.right.is_empty() {
                    {render_half(&props.right, TABLE_HALF_ROWS, props.highlighted)}
                }
            </div>
        </div>
    }
}

fn render_half(rows: &[DerivedHourlyRow], offset: usize, highlighted: Option<usize>) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th class="align-left">{"Hour"}</th>
                    <th>{"Predicted (MW)"}</th>
                    <th>{"Actual (MW)"}</th>
                    <th>{"Error (%)"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    rows.iter().enumerate().map(|(i, row)| {
                        let class = if highlighted == Some(offset + i) {
                            "row-highlighted"
                        } else if i % 2 == 0 {
                            "row-even"
                        } else {
                            "row-odd"
                        };
                        html! {
                            <tr key={offset + i} {class}>
                                <td class="align-left">{&row.hour}</td>
                                <td>{format_mw(row.predicted)}</td>
                                <td>{format_optional_mw(row.actual)}</td>
                                <td>{format_percent(row.error)}</td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
