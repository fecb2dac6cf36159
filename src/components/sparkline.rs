use std::rc::Rc;
use yew::prelude::*;

/// Fixed drawing width; the SVG stretches to its container
const VIEWBOX_WIDTH: f64 = 300.0;

/// Maps values onto SVG coordinates, highest value at the top
fn to_points(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0 // Avoid division by zero for flat lines
    } else {
        max - min
    };
    let last = values.len().saturating_sub(1).max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, &val)| {
            let x = i as f64 / last * width;
            let y = padding + (1.0 - (val - min) / range) * (height - 2.0 * padding);
            (x, y)
        })
        .collect()
}

/// Smooth SVG path through `values` using Catmull-Rom to Bezier conversion
pub fn build_smooth_path(values: &[f64], width: f64, height: f64, padding: f64) -> String {
    let points = to_points(values, width, height, padding);
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {:.2},{:.2}", first.0, first.1);

    for i in 0..points.len().saturating_sub(1) {
        let p0 = if i > 0 { points[i - 1] } else { points[i] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points.get(i + 2).copied().unwrap_or(p2);

        let tension = 6.0;
        let cp1x = p1.0 + (p2.0 - p0.0) / tension;
        let cp1y = p1.1 + (p2.1 - p0.1) / tension;
        let cp2x = p2.0 - (p3.0 - p1.0) / tension;
        let cp2y = p2.1 - (p3.1 - p1.1) / tension;

        path.push_str(&format!(
            " C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cp1x, cp1y, cp2x, cp2y, p2.0, p2.1
        ));
    }

    path
}

/// Closes a line path down to the baseline so it can be filled
pub fn build_area_path(line: &str, width: f64, height: f64) -> String {
    if line.is_empty() {
        return String::new();
    }
    format!("{line} L {width:.2},{height:.2} L 0.00,{height:.2} Z")
}

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub values: Rc<Vec<f64>>,

    /// Unique id for the fill gradient
    pub gradient_id: AttrValue,

    /// Stroke and fill color
    pub color: AttrValue,

    /// Height in pixels
    #[prop_or(64)]
    pub height: u32,
}

#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    if props.values.is_empty() {
        return html! {};
    }

    let height = f64::from(props.height);
    let line = build_smooth_path(&props.values, VIEWBOX_WIDTH, height, 4.0);
    let area = build_area_path(&line, VIEWBOX_WIDTH, height);
    let fill = format!("url(#{})", props.gradient_id);

    html! {
        <svg
            class="sparkline"
            viewBox={format!("0 0 {VIEWBOX_WIDTH} {height}")}
            preserveAspectRatio="none"
            style={format!("width: 100%; height: {}px; display: block;", props.height)}
        >
            <defs>
                <linearGradient id={props.gradient_id.clone()} x1="0" y1="0" x2="0" y2="1">
                    <stop offset="5%" stop-color={props.color.clone()} stop-opacity="0.3" />
                    <stop offset="95%" stop-color={props.color.clone()} stop-opacity="0" />
                </linearGradient>
            </defs>
            <path d={area} fill={fill} stroke="none" />
            <path
                d={line}
                fill="none"
                stroke={props.color.clone()}
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                vector-effect="non-scaling-stroke"
            />
        </svg>
    }
}
