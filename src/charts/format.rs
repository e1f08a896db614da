use chrono::{DateTime, NaiveDate};

/// `$1,234.56`, with the sign in front for negatives: `-$500.00`.
pub fn format_currency(value: f64) -> String {
    let grouped = group_thousands(value.abs(), 2);
    if value < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// `MM/DD/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Axis tick label for an epoch-millisecond value, read as a UTC date.
pub fn format_timestamp(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| format_date(dt.date_naive()))
}

/// Formats a non-negative value with comma thousands separators.
fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", value, decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
