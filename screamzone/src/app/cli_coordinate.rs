//! clap value parsers that reject out-of-range coordinates before a run begins.

pub fn parse_lat(s: &str) -> Result<f64, String> {
    parse_num(s, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))
}

pub fn parse_lon(s: &str) -> Result<f64, String> {
    parse_num(s, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))
}

pub fn parse_radius(s: &str) -> Result<f64, String> {
    parse_num(s, 0.0, f64::MAX).map_err(|e| format!("invalid radius: {e}"))
}

fn parse_num(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))?;
    if !v.is_finite() || v < min || max < v {
        Err(format!("{v} not in range [{min},{max}]"))
    } else {
        Ok(v)
    }
}
