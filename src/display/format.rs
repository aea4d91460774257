//! Number formatting with thousand separators.
//!
//! Operands are raw typed text, so formatting works on text: the
//! integer part gets thousand separators, the fractional part is
//! reattached exactly as typed (trailing zeros and a lone trailing
//! point included).

/// Format operand text for display.
///
/// The input is split at the first decimal point. The integer part is
/// rendered with thousand separators; if it fails to parse (empty
/// input, lone `.`), the integer portion of the display is empty. The
/// fractional text, when present, is appended after a `.` unmodified.
pub fn format_for_display(value: &str) -> String {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (value, None),
    };

    let integer_display = match int_part.parse::<f64>() {
        Ok(number) => format_integer(number, int_part),
        Err(_) => String::new(),
    };

    match frac_part {
        Some(frac) => format!("{}.{}", integer_display, frac),
        None => integer_display,
    }
}

/// Format the integer part with thousand separators.
///
/// Values at or beyond 1e15 in magnitude are outside the i64 grouping
/// routine's comfortable range and are echoed as typed.
fn format_integer(number: f64, raw: &str) -> String {
    if number.abs() < 1e15 {
        format_with_separators(number as i64)
    } else {
        raw.to_string()
    }
}

/// Format an integer with thousand separators.
fn format_with_separators(value: i64) -> String {
    let is_negative = value < 0;
    let abs_value = value.abs();
    let s = abs_value.to_string();

    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let formatted: String = result.chars().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}
