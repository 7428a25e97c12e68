//! Number formatting for cards and tiles.

/// A percentage change with an explicit sign for increases, e.g. "+4.2%".
pub fn signed_percent(diff: f64) -> String {
    let sign = if diff > 0.0 { "+" } else { "" };
    format!("{sign}{diff}%")
}

/// Search interest without a trailing ".0" for whole numbers.
pub fn interest(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
