/// Domain used when there is nothing to plot
pub const EMPTY_AXIS_MAX: f64 = 10_000.0;

/// Most gridlines an axis may carry; the step widens to stay under it
pub const MAX_TICKS: usize = 50;

/// Y-axis domain and gridline positions for the demand chart
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl AxisRange {
    /// Returns true if `value` should carry a text label under `label_step`
    pub fn is_labelled(value: f64, label_step: f64) -> bool {
        label_step > 0.0 && (value % label_step).abs() < f64::EPSILON
    }
}

/// Derives a padded axis range rounded out to whole `tick_step`s.
///
/// Padding is 5% of the observed spread, or 10% of the maximum when every
/// value is the same. The lower bound never drops below zero, and the range
/// always spans at least one step. When the range would need more than
/// [`MAX_TICKS`] gridlines the step is widened by a whole multiple.
pub fn compute_range(values: &[f64], tick_step: f64) -> AxisRange {
    let base_step = if tick_step.is_finite() && tick_step > 0.0 {
        tick_step
    } else {
        1000.0
    };

    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (observed_min, observed_max) = finite.fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    );

    if observed_min > observed_max {
        return AxisRange {
            min: 0.0,
            max: EMPTY_AXIS_MAX,
            ticks: ticks(0.0, EMPTY_AXIS_MAX, base_step),
        };
    }

    let spread = observed_max - observed_min;
    let padding = if spread > 0.0 {
        spread * 0.05
    } else {
        observed_max * 0.1
    };

    let lower = observed_min - padding;
    let upper = observed_max + padding;

    let needed = (upper - lower) / base_step;
    let step = if needed > MAX_TICKS as f64 {
        base_step * (needed / MAX_TICKS as f64).ceil()
    } else {
        base_step
    };

    let min = ((lower / step).floor() * step).max(0.0);
    let mut max = (upper / step).ceil() * step;
    if max <= min {
        max = min + step;
    }

    AxisRange {
        min,
        max,
        ticks: ticks(min, max, step),
    }
}

fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    // Count steps up front so float drift can't add or drop the last tick
    let count = (((max - min) / step).round() as usize).min(MAX_TICKS + 2);
    (0..=count).map(|i| min + i as f64 * step).collect()
}
