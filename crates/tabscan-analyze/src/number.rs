/// Renders a numeric statistic for display.
///
/// Integral values have no decimal point, values of magnitude 1000 or more
/// get exactly two decimals, anything else up to four decimals with trailing
/// zeros removed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        return strip_negative_zero(format!("{value:.0}"));
    }
    if value.abs() >= 1000.0 {
        return format!("{value:.2}");
    }
    let fixed = format!("{value:.4}");
    strip_negative_zero(fixed.trim_end_matches('0').trim_end_matches('.').to_string())
}

fn strip_negative_zero(formatted: String) -> String {
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
