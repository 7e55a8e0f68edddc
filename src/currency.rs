/// Parses a free-form, locale-ambiguous monetary string into a plain number.
///
/// Inputs arrive from hand-typed form fields or from an upstream model guess,
/// so the separator convention is unknown: `R$ 17.740,59` (Brazilian),
/// `1,234.56` (US), `17740.59` (pre-normalized) and `1750` must all work.
/// The decimal separator is decided by the POSITION of the last `,` relative
/// to the last `.`, never by counting separators.
///
/// # Examples
/// - `"R$ 17.740,59"` → 17740.59
/// - `"1,234.56"` → 1234.56
/// - `"1.234.567,89"` → 1234567.89
/// - `"1750"` → 1750.0
///
/// Malformed input never errors; it degrades to `0.0`. The result is always
/// finite.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    let last_comma = cleaned.rfind(',');
    let last_dot = cleaned.rfind('.');

    // A comma after the final dot (or with no dot at all) marks the comma as
    // the decimal separator; otherwise commas are grouping and are dropped.
    let comma_is_decimal = match (last_comma, last_dot) {
        (Some(comma), Some(dot)) => comma > dot,
        (Some(_), None) => true,
        _ => false,
    };

    let normalized = if comma_is_decimal {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Renders a number as fixed pt-BR currency: `R$ 1.234,56`.
///
/// Two fraction digits, dot-grouped thousands, comma decimal separator. The
/// output round-trips through [`parse_amount`].
pub fn format_brl(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}R$ {},{}", sign, group_thousands(units), cents)
}

/// Parses first, then renders. Empty input yields the canonical `R$ 0,00`.
pub fn format_brl_raw(raw: &str) -> String {
    if raw.is_empty() {
        return format_brl(0.0);
    }
    format_brl(parse_amount(raw))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brazilian_format() {
        assert_eq!(parse_amount("R$ 17.740,59"), 17740.59);
        assert_eq!(parse_amount("1.234.567,89"), 1234567.89);
        assert_eq!(parse_amount("0,50"), 0.5);
        assert_eq!(parse_amount("1750,"), 1750.0);
    }

    #[test]
    fn test_parse_us_format() {
        assert_eq!(parse_amount("1,234.56"), 1234.56);
        assert_eq!(parse_amount("1,234,567.89"), 1234567.89);
        assert_eq!(parse_amount("$ 99.95"), 99.95);
    }

    #[test]
    fn test_parse_no_separators() {
        assert_eq!(parse_amount("1750"), 1750.0);
        assert_eq!(parse_amount("17740.59"), 17740.59);
        assert_eq!(parse_amount("  12345.67 reais"), 12345.67);
    }

    #[test]
    fn test_parse_degrades_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount("R$"), 0.0);
        assert_eq!(parse_amount("12,34,56"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }

    #[test]
    fn test_parse_is_always_finite() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), 0.0);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(5.0), "R$ 5,00");
        assert_eq!(format_brl(1750.0), "R$ 1.750,00");
        assert_eq!(format_brl(17740.59), "R$ 17.740,59");
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(-5.5), "-R$ 5,50");
    }

    #[test]
    fn test_format_brl_raw() {
        assert_eq!(format_brl_raw(""), "R$ 0,00");
        assert_eq!(format_brl_raw("17740.59"), "R$ 17.740,59");
        assert_eq!(format_brl_raw("1.234,56"), "R$ 1.234,56");
        assert_eq!(format_brl_raw("garbage"), "R$ 0,00");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for value in [0.0, 0.01, 0.99, 1.0, 999.99, 1000.0, 17740.59, 1234567.89] {
            let rendered = format_brl(value);
            assert_eq!(
                format_brl(parse_amount(&rendered)),
                rendered,
                "round trip failed for {}",
                value
            );
        }
    }
}
