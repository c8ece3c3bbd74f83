use chrono::{Datelike, NaiveDateTime, Timelike};

pub const MISSING_DATE: &str = "Data não especificada";
pub const UNTITLED: &str = "Sem título";

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

pub fn month_name(month: u32) -> &'static str {
    MONTHS_PT
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default()
}

/// Long pt-PT date such as `10 de janeiro de 2025`. The time is appended only
/// when asked for and the hour is not midnight, which is how date-only records
/// are told apart from timed ones.
pub fn format_date(date: Option<NaiveDateTime>, include_time: bool) -> String {
    let Some(date) = date else {
        return MISSING_DATE.to_string();
    };

    let mut text = format!("{} de {} de {}", date.day(), month_name(date.month()), date.year());
    if include_time && date.hour() != 0 {
        text.push_str(&format!(", {:02}:{:02}", date.hour(), date.minute()));
    }
    text
}

pub fn format_date_range(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> String {
    match end {
        Some(end) => format!("{} até {}", format_date(start, true), format_date(Some(end), true)),
        None => format_date(start, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn formats_long_portuguese_date() {
        assert_eq!(format_date(Some(datetime(2025, 1, 10, 21, 30)), false), "10 de janeiro de 2025");
    }

    #[test]
    fn includes_time_when_requested() {
        assert_eq!(
            format_date(Some(datetime(2025, 3, 5, 21, 30)), true),
            "5 de março de 2025, 21:30"
        );
    }

    #[test]
    fn midnight_hides_time_even_when_requested() {
        assert_eq!(format_date(Some(datetime(2025, 12, 1, 0, 45)), true), "1 de dezembro de 2025");
    }

    #[test]
    fn missing_date_uses_placeholder() {
        assert_eq!(format_date(None, true), MISSING_DATE);
    }

    #[test]
    fn range_joins_start_and_end() {
        let text = format_date_range(
            Some(datetime(2025, 6, 1, 18, 0)),
            Some(datetime(2025, 6, 3, 23, 0)),
        );
        assert_eq!(text, "1 de junho de 2025, 18:00 até 3 de junho de 2025, 23:00");
    }

    #[test]
    fn range_without_end_is_just_start() {
        assert_eq!(format_date_range(Some(datetime(2025, 6, 1, 0, 0)), None), "1 de junho de 2025");
    }
}
