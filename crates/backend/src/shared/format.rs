/// Signed percentage with one decimal, e.g. `+8.9%` or `-10.0%`
pub fn format_percent_change(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}
