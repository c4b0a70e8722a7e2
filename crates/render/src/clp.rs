//! Chilean peso display formatting.

/// Format a raw amount as Chilean pesos: `$` prefix, dot thousands
/// separators, no decimals (`45231889.4` → `$45.231.889`).
///
/// Rounding to whole pesos happens here and only here; every layer below
/// works on unrounded floats.
pub fn format_clp(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
