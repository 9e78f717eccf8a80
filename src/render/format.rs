//! Text formatting for dashboard values.

/// Symbol prefixed to money. Unmapped codes render as the code plus a space;
/// no currency at all renders no prefix.
pub fn currency_symbol(code: Option<&str>) -> String {
    match code {
        Some("INR") => "₹".to_string(),
        Some("USD") => "$".to_string(),
        Some("EUR") => "€".to_string(),
        Some("GBP") => "£".to_string(),
        Some(other) => format!("{} ", other),
        None => String::new(),
    }
}

pub fn money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, grouped(value))
}

/// en-US grouping: comma thousands separators, at most three fraction digits.
pub fn grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Half away from zero, as the browser rounds
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{:.3}", rounded);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if value < 0.0 && rounded != 0.0 {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Number without grouping: integral values print without a decimal point.
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// `finishing_and_fittings` -> `Finishing And Fittings`.
pub fn title_case(item: &str) -> String {
    item.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_currency_symbols() {
        assert_eq!(currency_symbol(Some("INR")), "₹");
        assert_eq!(currency_symbol(Some("USD")), "$");
        assert_eq!(currency_symbol(Some("EUR")), "€");
        assert_eq!(currency_symbol(Some("GBP")), "£");
        assert_eq!(currency_symbol(Some("XYZ")), "XYZ ");
        assert_eq!(currency_symbol(None), "");
    }

    #[test]
    fn grouping_matches_en_us() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1000.0), "1,000");
        assert_eq!(grouped(5_400_000.0), "5,400,000");
        assert_eq!(grouped(-1_234_567.0), "-1,234,567");
        assert_eq!(grouped(1234.5), "1,234.5");
        assert_eq!(grouped(0.1234), "0.123");
        assert_eq!(grouped(2.0006), "2.001");
        assert_eq!(grouped(999_999.9996), "1,000,000");
        assert_eq!(grouped(-0.0001), "0");
    }

    #[test]
    fn money_prefixes_symbol() {
        assert_eq!(money("₹", 2_700_000.0), "₹2,700,000");
        assert_eq!(money("XYZ ", 1500.0), "XYZ 1,500");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(plain(12.0), "12");
        assert_eq!(plain(4.5), "4.5");
        assert_eq!(plain(-3.0), "-3");
    }

    #[test]
    fn item_names_are_capitalized() {
        assert_eq!(title_case("finishing_and_fittings"), "Finishing And Fittings");
        assert_eq!(title_case("cement"), "Cement");
        assert_eq!(title_case("pvc_pipes_2in"), "Pvc Pipes 2in");
    }
}
