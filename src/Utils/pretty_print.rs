/// significant digits of the default general float notation
pub const SIG_DIGITS: usize = 6;
/// width of a column of the L and U grids
pub const GRID_WIDTH: usize = 10;

/// Shortest general notation with 6 significant digits, the way C's `%g` prints:
/// 0.1 -> "0.1", 2/3 -> "0.666667", 1e-7 -> "1e-07", 1234567 -> "1.23457e+06".
pub fn format_g(v: f64) -> String {
    if v.is_nan() {
        return if v.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    // rounding to SIG_DIGITS may bump the exponent (9999999 -> 1e+07), so take it from here
    let sci = format!("{:.*e}", SIG_DIGITS - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(e) => (m, e),
            Err(_) => return sci,
        },
        None => return sci,
    };
    if exp < -4 || exp >= SIG_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIG_DIGITS as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// every value followed by a single space: "0.1 0.6 "
pub fn format_values<'a>(values: impl IntoIterator<Item = &'a f64>) -> String {
    values
        .into_iter()
        .map(|v| format!("{} ", format_g(*v)))
        .collect()
}

/// one line per row, each entry right-aligned in GRID_WIDTH chars and followed by a space
pub fn format_grid(m: &nalgebra::DMatrix<f64>) -> String {
    let mut out = String::new();
    for row in m.row_iter() {
        for v in row.iter() {
            out.push_str(&format!("{:>width$} ", format_g(*v), width = GRID_WIDTH));
        }
        out.push('\n');
    }
    out
}
