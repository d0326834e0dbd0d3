//! Brazilian currency and percentage formatting for display.

/// Format a value as Brazilian reais: `R$ 1.234,56`
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ --".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}R$ {},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Format a percentage with a comma decimal: `25%`, `12,5%`
pub fn format_percentage(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct).replace('.', ",")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(5.5), "R$ 5,50");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(100_000.0), "R$ 100.000,00");
        assert_eq!(format_brl(1_250_000.1), "R$ 1.250.000,10");
        assert_eq!(format_brl(-80.25), "-R$ 80,25");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
        assert_eq!(format_brl(f64::NAN), "R$ --");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(25.0), "25%");
        assert_eq!(format_percentage(12.5), "12,5%");
        assert_eq!(format_percentage(-5.0), "-5%");
    }
}
