/// Shown wherever a value is not available yet
pub const PLACEHOLDER: &str = "--";

/// Rounds to whole MW and groups thousands (`15740.4` -> `"15,740"`)
pub fn format_mw(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_optional_mw(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), format_mw)
}

/// One decimal place with a percent sign, or the placeholder
pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.1}%"))
}

/// Net flow with an explicit sign (`1495` -> `"+1,495 MW"`)
pub fn format_signed_mw(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{} MW", format_mw(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mw_grouping() {
        assert_eq!(format_mw(0.0), "0");
        assert_eq!(format_mw(999.0), "999");
        assert_eq!(format_mw(1000.0), "1,000");
        assert_eq!(format_mw(15740.4), "15,740");
        assert_eq!(format_mw(1234567.0), "1,234,567");
        assert_eq!(format_mw(-1495.0), "-1,495");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(format_optional_mw(None), "--");
        assert_eq!(format_percent(None), "--");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.2896)), "0.3%");
        assert_eq!(format_percent(Some(-0.21)), "-0.2%");
    }

    #[test]
    fn test_format_signed_mw() {
        assert_eq!(format_signed_mw(1495.0), "+1,495 MW");
        assert_eq!(format_signed_mw(-200.0), "-200 MW");
        assert_eq!(format_signed_mw(0.0), "0 MW");
    }
}
