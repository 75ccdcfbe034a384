/// "2024-12-08" -> "08/12". Anything that isn't three dash-separated parts is returned as is.
pub fn to_short_date_format(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [_, month, day] => format!("{day}/{month}"),
        _ => date.to_string(),
    }
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}
