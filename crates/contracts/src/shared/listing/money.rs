//! Разбор и форматирование денежных и количественных величин.
//!
//! Цены и минимальные партии хранятся как строки с валютой/единицей
//! ("170 000 ₽", "$129.99", "10 шт"). Фильтры и сортировки работают
//! только с числовой величиной, поэтому разбор отбрасывает символы
//! валют, пробельные и тысячные разделители.

/// Извлечь числовую величину из строки вида "170 000 ₽" или "$129.99".
///
/// Правила:
/// - берётся первая цифровая группа и всё, что к ней примыкает
///   (цифры, запятые, точки, обычные и неразрывные пробелы);
/// - последний разделитель `.`/`,` считается десятичным, только если
///   после него 1–2 цифры; иначе это разделитель тысяч;
/// - строка без цифр даёт `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;

    let mut token = String::new();
    for c in text[start..].chars() {
        match c {
            '0'..='9' | ',' | '.' => token.push(c),
            ' ' | '\u{00a0}' | '\u{202f}' => token.push(' '),
            _ => break,
        }
    }
    let token = token.trim_end_matches([' ', ',', '.']);

    let (integer_part, decimal_part) = match token.rfind([',', '.']) {
        Some(pos) => {
            let frac = &token[pos + 1..];
            if !frac.is_empty() && frac.len() <= 2 && frac.bytes().all(|b| b.is_ascii_digit()) {
                (&token[..pos], Some(frac))
            } else {
                (token, None)
            }
        }
        None => (token, None),
    };

    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() && decimal_part.is_none() {
        return None;
    }

    let normalized = format!(
        "{}.{}",
        if digits.is_empty() { "0" } else { &digits },
        decimal_part.unwrap_or("0")
    );
    normalized.parse::<f64>().ok()
}

/// Величина для сортировки: неразбираемая строка даёт 0.0.
///
/// Запись с битой ценой остаётся видимой и уходит в «дешёвый» конец
/// списка, а не выпадает из выдачи.
pub fn sort_magnitude(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// Форматирует сумму с разделителем тысяч (пробел).
///
/// Целые суммы выводятся без дробной части, остальные — с двумя знаками.
pub fn format_money(value: f64) -> String {
    let decimals = if (value - value.trunc()).abs() < 0.005 { 0 } else { 2 };
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ruble_price() {
        assert_eq!(parse_amount("170 000 ₽"), Some(170000.0));
        assert_eq!(parse_amount("170,000 ₽"), Some(170000.0));
        assert_eq!(parse_amount("280\u{00a0}000 ₽"), Some(280000.0));
    }

    #[test]
    fn test_parse_decimal_price() {
        assert_eq!(parse_amount("$129.99"), Some(129.99));
        assert_eq!(parse_amount("12,5 ₽"), Some(12.5));
        assert_eq!(parse_amount("1.234.567"), Some(1234567.0));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_amount("10 шт"), Some(10.0));
        assert_eq!(parse_amount("от 25 ед."), Some(25.0));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_amount("по запросу"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(sort_magnitude("по запросу"), 0.0);
        assert_eq!(sort_magnitude("170 000 ₽"), 170000.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(170000.0), "170 000");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0");
    }
}
