//! Parsing of human readable resistance values such as `4k7`, `330R`, `1,5M` or `100Ω`.

use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref VALUE: Regex = Regex::new(r"^(\d+(?:[.,]\d+)?)(?:([mRΩkM])(\d+)?)?$").unwrap();
}

fn multiplier(unit: &str) -> f64 {
    match unit {
        "m" => 1e-3,
        "k" => 1e3,
        "M" => 1e6,
        _ => 1.0,
    }
}

/// Parses a single resistance value in ohms.
///
/// Digits after the unit letter are the fractional part, read as written: `4k7` is 4.7kΩ and
/// `4k07` is 4.07kΩ.
/// # Examples
/// ```
///     # use resistor_finder::parse_resistance;
///     assert_eq!(parse_resistance("330R").unwrap(), 330.0);
///     assert_eq!(parse_resistance("2M2").unwrap(), 2_200_000.0);
///     assert!(parse_resistance("4.7 kOhm").is_err());
/// ```
pub fn parse_resistance(s: &str) -> Result<f64> {
    let input = s.trim();
    let caps = VALUE
        .captures(input)
        .ok_or_else(|| Error::InvalidValue(s.to_string()))?;
    let invalid = |_| Error::InvalidValue(s.to_string());

    let mut value: f64 = caps[1].replace(',', ".").parse().map_err(invalid)?;
    if let Some(fraction) = caps.get(3) {
        value += format!("0.{}", fraction.as_str())
            .parse::<f64>()
            .map_err(invalid)?;
    }
    let unit = caps.get(2).map_or("R", |m| m.as_str());
    Ok(value * multiplier(unit))
}

/// Parses a comma separated list of resistance values, e.g. `100R,330,4k7`.
pub fn parse_resistance_list(s: &str) -> Result<Vec<f64>> {
    s.split(',').map(parse_resistance).collect()
}

/// Parses a target value, which must be strictly positive.
pub fn parse_target(s: &str) -> Result<f64> {
    let value = parse_resistance(s)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidTarget(value))
    }
}
